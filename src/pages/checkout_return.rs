//! Checkout Return Page
//!
//! Landing page after the payment redirect. Activation is driven by the
//! backend payment webhook, so the plan status is polled until it flips to
//! active; if it never does within the attempt budget we fall back to the
//! account page instead of spinning forever.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::api::{self, ApiClient};
use crate::context::AppContext;
use crate::models::PlanStatus;
use crate::poll::{poll_until, PollConfig, PollOutcome};

#[component]
pub fn CheckoutReturnPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let navigate = use_navigate();
    let query = use_query_map();

    let (waiting, set_waiting) = signal(true);

    Effect::new(move |_| {
        let plan_id = query
            .read_untracked()
            .get("planId")
            .and_then(|raw| raw.parse::<u32>().ok());
        let navigate = navigate.clone();
        let Some(plan_id) = plan_id else {
            navigate("/plans", Default::default());
            return;
        };

        spawn_local(async move {
            let outcome = poll_until(PollConfig::default(), |_attempt| async move {
                match api::get_plan(&api, plan_id).await {
                    Ok(plan) if plan.status == PlanStatus::Active => Some(plan),
                    _ => None,
                }
            })
            .await;

            set_waiting.set(false);
            match outcome {
                PollOutcome::Ready(plan) => {
                    ctx.notify("Payment received. Your plan is active.");
                    navigate(&format!("/plans/{}", plan.id), Default::default());
                }
                PollOutcome::GaveUp => {
                    ctx.notify("Payment is still processing. Your plan will activate shortly.");
                    navigate("/account", Default::default());
                }
            }
        });
    });

    view! {
        <div class="checkout-return">
            <h1>"Finishing up"</h1>
            {move || waiting.get().then(|| view! {
                <p class="checkout-waiting">"Confirming your payment…"</p>
            })}
        </div>
    }
}
