//! Login Page
//!
//! Sign-in and account creation on one form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::{self, ApiClient, Credentials, Registration};
use crate::store::{store_set_user, use_app_store};

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let store = use_app_store();
    let navigate = use_navigate();

    let (registering, set_registering) = signal(false);
    let (email, set_email) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        set_submitting.set(true);
        set_error.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            let email_value = email.get_untracked();
            let password_value = password.get_untracked();
            let result = if registering.get_untracked() {
                let name_value = name.get_untracked();
                api::register(
                    &api,
                    &Registration {
                        email: &email_value,
                        name: &name_value,
                        password: &password_value,
                    },
                )
                .await
            } else {
                api::login(
                    &api,
                    &Credentials {
                        email: &email_value,
                        password: &password_value,
                    },
                )
                .await
            };

            set_submitting.set(false);
            match result {
                Ok(session) => {
                    store_set_user(&store, Some(session.user));
                    navigate("/plans", Default::default());
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="login-page">
            <h1>{move || if registering.get() { "Create account" } else { "Sign in" }}</h1>

            <form class="login-form" on:submit=on_submit>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                {move || registering.get().then(|| view! {
                    <input
                        type="text"
                        placeholder="Your name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                })}
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />

                {move || error.get().map(|message| view! {
                    <p class="form-error">{message}</p>
                })}

                <button type="submit" disabled=move || submitting.get()>
                    {move || if registering.get() { "Create account" } else { "Sign in" }}
                </button>
            </form>

            <button
                class="login-toggle"
                on:click=move |_| {
                    set_registering.update(|v| *v = !*v);
                    set_error.set(None);
                }
            >
                {move || if registering.get() {
                    "Already have an account? Sign in"
                } else {
                    "New here? Create an account"
                }}
            </button>
        </div>
    }
}
