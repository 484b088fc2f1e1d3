//! Partner Page
//!
//! Dashboard for affiliate partners: profile, referral code and commission
//! history.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiClient};
use crate::models::{Commission, Partner};

#[component]
pub fn PartnerPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let (partner, set_partner) = signal(None::<Partner>);
    let (commissions, set_commissions) = signal(Vec::<Commission>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            // A plain customer account has no partner profile; that is not
            // an error worth surfacing
            if let Ok(profile) = api::partner_profile(&api).await {
                if let Ok(list) = api::partner_commissions(&api).await {
                    set_commissions.set(list);
                }
                set_partner.set(Some(profile));
            }
            set_loading.set(false);
        });
    });

    let total_earned = move || commissions.get().iter().map(|c| c.amount).sum::<f64>();

    view! {
        <div class="partner-page">
            <h1>"Partner dashboard"</h1>

            {move || loading.get().then(|| view! { <p class="loading">"Loading…"</p> })}

            {move || (!loading.get()).then(|| match partner.get() {
                Some(profile) => view! {
                    <div class="partner-profile">
                        <p class="partner-name">{profile.name.clone()}</p>
                        <p class="partner-code">
                            "Referral code: "
                            <code>{profile.referral_code.clone()}</code>
                        </p>
                        <p class="partner-rate">
                            {format!("{:.0}% commission on referred plans", profile.commission_rate * 100.0)}
                        </p>
                    </div>

                    <h2>"Commissions"</h2>
                    <p class="partner-total">{move || format!("€{:.2} earned in total", total_earned())}</p>
                    <table class="commission-table">
                        <thead>
                            <tr>
                                <th>"Earned"</th>
                                <th>"Plan"</th>
                                <th>"Amount"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || commissions.get()
                                key=|commission| commission.id
                                children=move |commission| view! {
                                    <tr>
                                        <td>{commission.earned_at.date_naive().to_string()}</td>
                                        <td>{format!("#{}", commission.plan_id)}</td>
                                        <td>{format!("€{:.2}", commission.amount)}</td>
                                        <td>{commission.status.label()}</td>
                                    </tr>
                                }
                            />
                        </tbody>
                    </table>
                }
                .into_any(),
                None => view! {
                    <p class="partner-pitch">
                        "This account is not enrolled in the partner program. \
                         Get in touch if you would like to refer customers."
                    </p>
                }
                .into_any(),
            })}
        </div>
    }
}
