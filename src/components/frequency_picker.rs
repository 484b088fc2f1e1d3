//! Frequency Picker Component
//!
//! Button group for choosing the delivery cadence.

use leptos::prelude::*;

use crate::models::DeliveryFrequency;

/// Cadence options, in display order
pub const FREQUENCIES: &[DeliveryFrequency] = &[
    DeliveryFrequency::Weekly,
    DeliveryFrequency::Biweekly,
    DeliveryFrequency::Monthly,
];

#[component]
pub fn FrequencyPicker(
    #[prop(into)] value: Signal<DeliveryFrequency>,
    #[prop(into)] on_change: Callback<DeliveryFrequency>,
) -> impl IntoView {
    view! {
        <div class="type-selector-row">
            {FREQUENCIES.iter().map(|frequency| {
                let frequency = *frequency;
                let is_selected = move || value.get() == frequency;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "type-btn active" } else { "type-btn" }
                        on:click=move |_| on_change.run(frequency)
                    >
                        {frequency.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
