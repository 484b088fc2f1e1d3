//! Plan Card Component
//!
//! Summary card for the plan list, linking to the plan detail page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::models::{Plan, PlanDetails};

fn cadence_line(details: &PlanDetails) -> String {
    match details {
        PlanDetails::Subscription { frequency } => frequency.label().to_string(),
        PlanDetails::Upfront {
            years,
            deliveries_per_year,
        } => format!("{years} years, {deliveries_per_year} deliveries a year"),
        PlanDetails::SingleDelivery { delivery_date } => {
            format!("Delivery on {delivery_date}")
        }
    }
}

#[component]
pub fn PlanCard(plan: Plan) -> impl IntoView {
    let href = format!("/plans/{}", plan.id);
    let status_class = format!("plan-status {}", status_slug(&plan));
    let cadence = cadence_line(&plan.details);

    view! {
        <A href=href>
            <div class="plan-card">
                <div class="plan-card-header">
                    <span class="plan-kind">{plan.details.label()}</span>
                    <span class=status_class>{plan.status.label()}</span>
                </div>
                <p class="plan-recipient">"For " {plan.recipient_name.clone()}</p>
                <p class="plan-budget">{format!("€{:.0} per delivery", plan.budget)}</p>
                <p class="plan-cadence">{cadence}</p>
            </div>
        </A>
    }
}

fn status_slug(plan: &Plan) -> &'static str {
    use crate::models::PlanStatus;
    match plan.status {
        PlanStatus::PendingPayment => "pending",
        PlanStatus::Active => "active",
        PlanStatus::Paused => "paused",
        PlanStatus::Cancelled => "cancelled",
    }
}
