//! Flash Banner Component
//!
//! Transient info/error banner fed by AppContext.

use leptos::prelude::*;

use crate::context::{AppContext, FlashKind};

#[component]
pub fn FlashBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.flash.get().map(|flash| {
            let class = match flash.kind {
                FlashKind::Info => "flash-banner info",
                FlashKind::Error => "flash-banner error",
            };
            view! {
                <div class=class>
                    <span>{flash.message.clone()}</span>
                    <button class="flash-dismiss" on:click=move |_| ctx.clear_flash()>
                        "×"
                    </button>
                </div>
            }
        })}
    }
}
