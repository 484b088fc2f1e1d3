//! Admin Partner Management Page
//!
//! Create partners, review their referral codes and settle commissions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiClient, NewPartnerArgs};
use crate::context::AppContext;
use crate::models::{Commission, CommissionStatus, Partner};
use crate::store::{store_is_staff, use_app_store};

#[component]
pub fn AdminPartnersPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (partners, set_partners) = signal(Vec::<Partner>::new());
    let (commissions, set_commissions) = signal(Vec::<Commission>::new());
    let (new_name, set_new_name) = signal(String::new());
    let (new_rate, set_new_rate) = signal(String::from("10"));

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        if !store_is_staff(&store) {
            return;
        }
        spawn_local(async move {
            if let Ok(list) = api::admin_list_partners(&api).await {
                set_partners.set(list);
            }
            if let Ok(list) = api::admin_list_commissions(&api).await {
                set_commissions.set(list);
            }
        });
    });

    let on_create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get_untracked();
        if name.trim().is_empty() {
            return;
        }
        // Rate is entered as a percentage
        let Ok(percent) = new_rate.get_untracked().parse::<f64>() else {
            ctx.notify_error("Commission rate must be a number");
            return;
        };
        if !(0.0..=50.0).contains(&percent) {
            ctx.notify_error("Commission rate must be between 0 and 50 percent");
            return;
        }

        spawn_local(async move {
            let args = NewPartnerArgs {
                name: name.trim(),
                commission_rate: percent / 100.0,
            };
            match api::admin_create_partner(&api, &args).await {
                Ok(created) => {
                    set_partners.update(|list| list.push(created));
                    set_new_name.set(String::new());
                }
                Err(e) => ctx.notify_error(e.to_string()),
            }
        });
    };

    let on_mark_paid = Callback::new(move |id: u32| {
        spawn_local(async move {
            match api::mark_commission_paid(&api, id).await {
                Ok(updated) => set_commissions.update(|list| {
                    if let Some(row) = list.iter_mut().find(|c| c.id == updated.id) {
                        *row = updated;
                    }
                }),
                Err(e) => ctx.notify_error(e.to_string()),
            }
        });
    });

    view! {
        <div class="admin-page">
            <h1>"Partners & commissions"</h1>
            {move || if store_is_staff(&store) {
                view! {
                    <form class="partner-add-form" on:submit=on_create.clone()>
                        <input
                            type="text"
                            placeholder="Partner name"
                            prop:value=move || new_name.get()
                            on:input=move |ev| set_new_name.set(event_target_value(&ev))
                        />
                        <input
                            type="number"
                            min="0"
                            max="50"
                            step="0.5"
                            prop:value=move || new_rate.get()
                            on:input=move |ev| set_new_rate.set(event_target_value(&ev))
                        />
                        <span>"% commission"</span>
                        <button type="submit">"Add partner"</button>
                    </form>

                    <table class="partner-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Referral code"</th>
                                <th>"Rate"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || partners.get()
                                key=|partner| partner.id
                                children=move |partner| view! {
                                    <tr>
                                        <td>{partner.name.clone()}</td>
                                        <td><code>{partner.referral_code.clone()}</code></td>
                                        <td>{format!("{:.1}%", partner.commission_rate * 100.0)}</td>
                                    </tr>
                                }
                            />
                        </tbody>
                    </table>

                    <h2>"Commissions"</h2>
                    <table class="commission-table">
                        <thead>
                            <tr>
                                <th>"Earned"</th>
                                <th>"Partner"</th>
                                <th>"Plan"</th>
                                <th>"Amount"</th>
                                <th>"Status"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || commissions.get()
                                key=|commission| (commission.id, commission.status)
                                children=move |commission| {
                                    let id = commission.id;
                                    let payable = commission.status != CommissionStatus::Paid;
                                    view! {
                                        <tr>
                                            <td>{commission.earned_at.date_naive().to_string()}</td>
                                            <td>{format!("#{}", commission.partner_id)}</td>
                                            <td>{format!("#{}", commission.plan_id)}</td>
                                            <td>{format!("€{:.2}", commission.amount)}</td>
                                            <td>{commission.status.label()}</td>
                                            <td>
                                                {payable.then(|| view! {
                                                    <button on:click=move |_| on_mark_paid.run(id)>
                                                        "Mark paid"
                                                    </button>
                                                })}
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                }
                .into_any()
            } else {
                view! { <p class="admin-denied">"This area is for fulfillment staff."</p> }
                    .into_any()
            }}
        </div>
    }
}
