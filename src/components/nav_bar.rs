//! Navigation Bar Component
//!
//! Top-level navigation with session-aware links.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::api::{self, ApiClient};
use crate::store::{store_is_staff, store_set_user, use_app_store, AppStateStoreFields};

#[component]
pub fn NavBar() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let store = use_app_store();
    let navigate = use_navigate();

    let user_name = move || {
        store
            .current_user()
            .read()
            .as_ref()
            .map(|user| user.name.clone())
    };
    let is_staff = move || store_is_staff(&store);

    let on_logout = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            api::logout(&api).await;
            store_set_user(&store, None);
            navigate("/", Default::default());
        });
    };

    view! {
        <nav class="nav-bar">
            <A href="/">
                <span class="nav-brand">"Bloombox"</span>
            </A>

            {move || user_name().map(|_| view! {
                <A href="/plans">"My plans"</A>
                <A href="/partner">"Partner"</A>
            })}
            {move || is_staff().then(|| view! {
                <A href="/admin">"Back office"</A>
            })}

            <div class="nav-session">
                {move || match user_name() {
                    Some(name) => view! {
                        <A href="/account">{name}</A>
                        <button class="nav-logout" on:click=on_logout.clone()>"Sign out"</button>
                    }
                    .into_any(),
                    None => view! {
                        <A href="/login">"Sign in"</A>
                    }
                    .into_any(),
                }}
            </div>
        </nav>
    }
}
