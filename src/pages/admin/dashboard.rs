//! Admin Dashboard Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api::{self, ApiClient};
use crate::models::EventStatus;
use crate::store::{store_is_staff, use_app_store};

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let store = use_app_store();

    let (open_deliveries, set_open_deliveries) = signal(None::<usize>);

    Effect::new(move |_| {
        if !store_is_staff(&store) {
            return;
        }
        spawn_local(async move {
            if let Ok(queue) = api::list_delivery_queue(&api).await {
                let open = queue
                    .iter()
                    .filter(|event| {
                        matches!(event.status, EventStatus::Scheduled | EventStatus::Preparing)
                    })
                    .count();
                set_open_deliveries.set(Some(open));
            }
        });
    });

    view! {
        <div class="admin-page">
            <h1>"Back office"</h1>
            {move || if store_is_staff(&store) {
                view! {
                    <div class="admin-tiles">
                        <A href="/admin/events">
                            <div class="admin-tile">
                                <h2>"Delivery queue"</h2>
                                {move || open_deliveries.get().map(|open| view! {
                                    <p>{format!("{open} open deliveries")}</p>
                                })}
                            </div>
                        </A>
                        <A href="/admin/partners">
                            <div class="admin-tile">
                                <h2>"Partners & commissions"</h2>
                            </div>
                        </A>
                    </div>
                }
                .into_any()
            } else {
                view! { <p class="admin-denied">"This area is for fulfillment staff."</p> }
                    .into_any()
            }}
        </div>
    }
}
