//! Bloombox Frontend App
//!
//! Root component: session restore, shared providers, navigation and
//! routes.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::api::{self, ApiClient};
use crate::components::{FlashBanner, NavBar};
use crate::context::{AppContext, Flash};
use crate::pages::{
    AccountPage, AdminDashboardPage, AdminEventsPage, AdminPartnersPage, CheckoutReturnPage,
    HomePage, LoginPage, PartnerPage, PlanDetailPage, PlanWizardPage, PlansPage,
};
use crate::store::{store_set_user, AppState, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (flash, set_flash) = signal(None::<Flash>);

    let api = ApiClient::new();
    let store: AppStore = Store::new(AppState::default());

    // Resume a persisted session before any page fetches data
    if let Some(session) = api::restore_session(&api) {
        store_set_user(&store, Some(session.user));
    }

    // Provide context to all children
    provide_context(api);
    provide_context(store);
    provide_context(AppContext::new(
        (reload_trigger, set_reload_trigger),
        (flash, set_flash),
    ));

    view! {
        <Router>
            <NavBar />
            <FlashBanner />
            <main class="main-content">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/account") view=AccountPage />
                    <Route path=path!("/plans") view=PlansPage />
                    <Route path=path!("/plans/new") view=PlanWizardPage />
                    <Route path=path!("/plans/:id") view=PlanDetailPage />
                    <Route path=path!("/checkout/return") view=CheckoutReturnPage />
                    <Route path=path!("/partner") view=PartnerPage />
                    <Route path=path!("/admin") view=AdminDashboardPage />
                    <Route path=path!("/admin/events") view=AdminEventsPage />
                    <Route path=path!("/admin/partners") view=AdminPartnersPage />
                </Routes>
            </main>
        </Router>
    }
}
