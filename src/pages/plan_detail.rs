//! Plan Detail Page
//!
//! Plan overview with upcoming deliveries, budget/frequency editing backed
//! by the debounced price preview, checkout for unpaid plans and
//! cancellation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::api::{self, ApiClient};
use crate::components::{BudgetSlider, FrequencyPicker, PriceSummary};
use crate::context::AppContext;
use crate::models::{
    DeliveryEvent, DeliveryFrequency, Plan, PlanDetails, PlanStatus, PlanUpdate, QuoteParams,
};
use crate::recalc::use_price_recalc;

fn quote_params_for(
    budget: f64,
    frequency: DeliveryFrequency,
    details: &PlanDetails,
) -> QuoteParams {
    match details {
        PlanDetails::Upfront {
            years,
            deliveries_per_year,
        } => QuoteParams {
            budget,
            frequency: None,
            deliveries_per_year: Some(*deliveries_per_year),
            years: Some(*years),
        },
        PlanDetails::SingleDelivery { .. } => QuoteParams {
            budget,
            frequency: None,
            deliveries_per_year: None,
            years: None,
        },
        PlanDetails::Subscription { .. } => QuoteParams {
            budget,
            frequency: Some(frequency),
            deliveries_per_year: None,
            years: None,
        },
    }
}

#[component]
pub fn PlanDetailPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let params = use_params_map();

    let plan_id = Memo::new(move |_| {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<u32>().ok())
    });

    let (plan, set_plan) = signal(None::<Plan>);
    let (events, set_events) = signal(Vec::<DeliveryEvent>::new());
    let (budget, set_budget) = signal(50.0f64);
    let (frequency, set_frequency) = signal(DeliveryFrequency::Monthly);
    let (saving, set_saving) = signal(false);

    let recalc = use_price_recalc(api);

    // Load plan and deliveries when the route id changes
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let Some(id) = plan_id.get() else {
            return;
        };
        spawn_local(async move {
            match api::get_plan(&api, id).await {
                Ok(loaded) => {
                    set_budget.set(loaded.budget);
                    if let PlanDetails::Subscription { frequency } = &loaded.details {
                        set_frequency.set(*frequency);
                    }
                    set_plan.set(Some(loaded));
                }
                Err(e) => ctx.notify_error(e.to_string()),
            }
            if let Ok(loaded) = api::list_plan_events(&api, id).await {
                set_events.set(loaded);
            }
        });
    });

    // Any edit reschedules the price preview; the debouncer coalesces bursts
    let reschedule = move |budget_value: f64, frequency_value: DeliveryFrequency| {
        plan.with_untracked(|current| {
            if let Some(current) = current {
                recalc.schedule(quote_params_for(
                    budget_value,
                    frequency_value,
                    &current.details,
                ));
            }
        });
    };

    let on_budget = Callback::new(move |value: f64| {
        set_budget.set(value);
        reschedule(value, frequency.get_untracked());
    });
    let on_frequency = Callback::new(move |value: DeliveryFrequency| {
        set_frequency.set(value);
        reschedule(budget.get_untracked(), value);
    });

    let on_save = move |_| {
        let Some(id) = plan_id.get_untracked() else {
            return;
        };
        if saving.get_untracked() {
            return;
        }
        let is_subscription = plan.with_untracked(|p| {
            matches!(
                p.as_ref().map(|plan| &plan.details),
                Some(PlanDetails::Subscription { .. })
            )
        });
        let update = PlanUpdate {
            budget: Some(budget.get_untracked()),
            frequency: is_subscription.then(|| frequency.get_untracked()),
            note: None,
        };
        set_saving.set(true);
        spawn_local(async move {
            match api::update_plan(&api, id, &update).await {
                Ok(updated) => {
                    set_plan.set(Some(updated));
                    ctx.notify("Plan updated");
                }
                Err(e) => ctx.notify_error(e.to_string()),
            }
            set_saving.set(false);
        });
    };

    let on_checkout = move |_| {
        let Some(id) = plan_id.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api::create_checkout(&api, id).await {
                Ok(session) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&session.checkout_url);
                    }
                }
                Err(e) => ctx.notify_error(e.to_string()),
            }
        });
    };

    let on_cancel = move |_| {
        let Some(id) = plan_id.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api::cancel_plan(&api, id).await {
                Ok(updated) => {
                    set_plan.set(Some(updated));
                    ctx.notify("Plan cancelled");
                }
                Err(e) => ctx.notify_error(e.to_string()),
            }
        });
    };

    let is_subscription = move || {
        plan.with(|p| {
            matches!(
                p.as_ref().map(|plan| &plan.details),
                Some(PlanDetails::Subscription { .. })
            )
        })
    };
    let status = move || plan.with(|p| p.as_ref().map(|plan| plan.status));
    let editable = move || {
        matches!(
            status(),
            Some(PlanStatus::Active) | Some(PlanStatus::PendingPayment) | Some(PlanStatus::Paused)
        )
    };

    view! {
        <div class="plan-detail">
            {move || plan.get().map(|current| view! {
                <div class="plan-detail-header">
                    <h1>{current.details.label()} " for " {current.recipient_name.clone()}</h1>
                    <span class="plan-status">{current.status.label()}</span>
                </div>
                <p class="plan-address">{current.recipient_address.clone()}</p>
            })}

            {move || (status() == Some(PlanStatus::PendingPayment)).then(|| view! {
                <div class="checkout-callout">
                    <p>"This plan is waiting for payment."</p>
                    <button class="btn btn-primary" on:click=on_checkout>
                        "Continue to payment"
                    </button>
                </div>
            })}

            {move || editable().then(|| view! {
                <div class="plan-edit">
                    <h2>"Adjust your plan"</h2>
                    <BudgetSlider value=budget on_change=on_budget />
                    {is_subscription().then(|| view! {
                        <FrequencyPicker value=frequency on_change=on_frequency />
                    })}
                    <PriceSummary recalc=recalc />
                    <button
                        class="btn"
                        disabled=move || saving.get()
                        on:click=on_save
                    >
                        "Save changes"
                    </button>
                </div>
            })}

            <div class="deliveries">
                <h2>"Deliveries"</h2>
                <ul class="delivery-list">
                    <For
                        each=move || events.get()
                        key=|event| event.id
                        children=move |event| view! {
                            <li class="delivery-row">
                                <span class="delivery-date">{event.scheduled_for.to_string()}</span>
                                <span class="delivery-status">{event.status.label()}</span>
                            </li>
                        }
                    />
                </ul>
                {move || events.get().is_empty().then(|| view! {
                    <p class="empty">"No deliveries scheduled yet."</p>
                })}
            </div>

            {move || (editable() && status() != Some(PlanStatus::PendingPayment)).then(|| view! {
                <button class="btn btn-danger" on:click=on_cancel>
                    "Cancel plan"
                </button>
            })}
        </div>
    }
}
