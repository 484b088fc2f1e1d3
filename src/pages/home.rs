//! Home Page

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <h1>"Fresh flowers, on your schedule"</h1>
            <p class="subtitle">
                "Subscriptions, multi-year gifts and one-off bouquets, delivered to the door."
            </p>

            <div class="plan-kinds">
                <div class="plan-kind-card">
                    <h2>"Subscription"</h2>
                    <p>"A bouquet every week, fortnight or month. Pause or cancel any time."</p>
                </div>
                <div class="plan-kind-card featured">
                    <span class="badge">"Popular gift"</span>
                    <h2>"Upfront"</h2>
                    <p>"Pay once, delight someone for up to five years."</p>
                </div>
                <div class="plan-kind-card">
                    <h2>"Single delivery"</h2>
                    <p>"One bouquet, one date, no strings attached."</p>
                </div>
            </div>

            <A href="/plans/new">
                <button class="btn btn-primary">"Build your plan"</button>
            </A>
        </div>
    }
}
