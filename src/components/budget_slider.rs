//! Budget Slider Component
//!
//! Paired range/number inputs for the per-delivery budget.

use leptos::prelude::*;

const MIN_BUDGET: f64 = 20.0;
const MAX_BUDGET: f64 = 500.0;

#[component]
pub fn BudgetSlider(
    #[prop(into)] value: Signal<f64>,
    #[prop(into)] on_change: Callback<f64>,
) -> impl IntoView {
    view! {
        <div class="budget-slider">
            <input
                type="range"
                min="20"
                max="500"
                step="5"
                prop:value=move || value.get().to_string()
                on:input=move |ev| {
                    if let Ok(budget) = event_target_value(&ev).parse::<f64>() {
                        on_change.run(budget.clamp(MIN_BUDGET, MAX_BUDGET));
                    }
                }
            />
            <input
                type="number"
                min="20"
                max="500"
                prop:value=move || format!("{:.0}", value.get())
                on:input=move |ev| {
                    if let Ok(budget) = event_target_value(&ev).parse::<f64>() {
                        on_change.run(budget.clamp(MIN_BUDGET, MAX_BUDGET));
                    }
                }
            />
            <span class="budget-currency">"€ per delivery"</span>
        </div>
    }
}
