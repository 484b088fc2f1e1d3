//! Account Page

use leptos::prelude::*;
use leptos_router::components::A;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn AccountPage() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="account-page">
            <h1>"Your account"</h1>
            {move || match store.current_user().get() {
                Some(user) => view! {
                    <div class="account-details">
                        <p class="account-name">{user.name.clone()}</p>
                        <p class="account-email">{user.email.clone()}</p>
                    </div>
                    <div class="account-links">
                        <A href="/plans">"My plans"</A>
                        <A href="/partner">"Partner dashboard"</A>
                    </div>
                }
                .into_any(),
                None => view! {
                    <p>
                        "You are not signed in. "
                        <A href="/login">"Sign in"</A>
                    </p>
                }
                .into_any(),
            }}
        </div>
    }
}
