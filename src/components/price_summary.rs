//! Price Summary Component
//!
//! Live price preview fed by a debounced recalculation session. Shows a
//! recalculating hint while input is settling or a request is in flight,
//! and keeps the last good amount visible when a calculation fails.

use leptos::prelude::*;

use crate::recalc::PriceRecalc;

#[component]
pub fn PriceSummary(recalc: PriceRecalc) -> impl IntoView {
    let pending = recalc.debounce_pending();
    let calculating = recalc.calculating();
    let quote = recalc.quote();
    let error = recalc.error();

    let busy = move || pending.get() || calculating.get();

    view! {
        <div class="price-summary">
            {move || quote.get().map(|q| view! {
                <div class="price-amount">
                    <span class="amount">{format!("€{:.2}", q.amount)}</span>
                    {busy().then(|| view! { <span class="price-busy">"recalculating…"</span> })}
                </div>
                {q.breakdown.map(|lines| view! {
                    <ul class="price-breakdown">
                        {lines.into_iter().map(|line| view! {
                            <li>
                                <span>{line.label.clone()}</span>
                                <span>{format!("€{:.2}", line.amount)}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                })}
            })}
            {move || (quote.get().is_none() && busy()).then(|| view! {
                <p class="price-waiting">"Calculating price…"</p>
            })}
            {move || error.get().map(|e| view! {
                <p class="price-error">{e.to_string()}</p>
            })}
        </div>
    }
}
