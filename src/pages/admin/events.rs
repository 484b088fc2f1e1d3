//! Admin Delivery Queue Page
//!
//! Fulfillment worklist: upcoming deliveries with deliver/skip actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiClient};
use crate::context::AppContext;
use crate::models::{DeliveryEvent, EventStatus};
use crate::store::{store_is_staff, use_app_store};

#[component]
pub fn AdminEventsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (events, set_events) = signal(Vec::<DeliveryEvent>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        if !store_is_staff(&store) {
            return;
        }
        spawn_local(async move {
            match api::list_delivery_queue(&api).await {
                Ok(queue) => set_events.set(queue),
                Err(e) => ctx.notify_error(e.to_string()),
            }
            set_loading.set(false);
        });
    });

    fn replace_row(set_events: WriteSignal<Vec<DeliveryEvent>>, updated: DeliveryEvent) {
        set_events.update(|list| {
            if let Some(row) = list.iter_mut().find(|event| event.id == updated.id) {
                *row = updated;
            }
        });
    }

    let on_deliver = Callback::new(move |id: u32| {
        spawn_local(async move {
            match api::mark_event_delivered(&api, id).await {
                Ok(updated) => replace_row(set_events, updated),
                Err(e) => ctx.notify_error(e.to_string()),
            }
        });
    });

    let on_skip = Callback::new(move |id: u32| {
        spawn_local(async move {
            match api::mark_event_skipped(&api, id).await {
                Ok(updated) => replace_row(set_events, updated),
                Err(e) => ctx.notify_error(e.to_string()),
            }
        });
    });

    view! {
        <div class="admin-page">
            <h1>"Delivery queue"</h1>
            {move || if store_is_staff(&store) {
                view! {
                    {move || loading.get().then(|| view! { <p class="loading">"Loading…"</p> })}
                    <table class="event-table">
                        <thead>
                            <tr>
                                <th>"Date"</th>
                                <th>"Plan"</th>
                                <th>"Recipient"</th>
                                <th>"Status"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || events.get()
                                key=|event| (event.id, event.status)
                                children=move |event| {
                                    let id = event.id;
                                    let actionable = matches!(
                                        event.status,
                                        EventStatus::Scheduled | EventStatus::Preparing
                                    );
                                    view! {
                                        <tr>
                                            <td>{event.scheduled_for.to_string()}</td>
                                            <td>{format!("#{}", event.plan_id)}</td>
                                            <td>{event.recipient_name.clone().unwrap_or_default()}</td>
                                            <td>{event.status.label()}</td>
                                            <td>
                                                {actionable.then(|| view! {
                                                    <button on:click=move |_| on_deliver.run(id)>
                                                        "Delivered"
                                                    </button>
                                                    <button on:click=move |_| on_skip.run(id)>
                                                        "Skip"
                                                    </button>
                                                })}
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                    {move || (!loading.get() && events.get().is_empty()).then(|| view! {
                        <p class="empty">"Nothing in the queue."</p>
                    })}
                }
                .into_any()
            } else {
                view! { <p class="admin-denied">"This area is for fulfillment staff."</p> }
                    .into_any()
            }}
        </div>
    }
}
