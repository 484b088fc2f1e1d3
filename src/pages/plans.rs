//! Plans Page
//!
//! The signed-in customer's plan list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api::{self, ApiClient};
use crate::components::PlanCard;
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn PlansPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let (loading, set_loading) = signal(true);

    // Load plans on mount and whenever a reload is requested
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            match api::list_plans(&api).await {
                Ok(plans) => *store.plans().write() = plans,
                Err(e) => {
                    web_sys::console::warn_1(&format!("[PLANS] load failed: {e}").into());
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="plans-page">
            <div class="plans-header">
                <h1>"My plans"</h1>
                <A href="/plans/new">
                    <button class="btn btn-primary">"New plan"</button>
                </A>
            </div>

            {move || loading.get().then(|| view! { <p class="loading">"Loading…"</p> })}

            <div class="plan-list">
                <For
                    each=move || store.plans().get()
                    key=|plan| plan.id
                    children=move |plan| view! { <PlanCard plan=plan /> }
                />
            </div>

            {move || (!loading.get() && store.plans().read().is_empty()).then(|| view! {
                <p class="empty">"No plans yet. Start with your first bouquet."</p>
            })}
        </div>
    }
}
