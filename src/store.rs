//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use crate::models::{Plan, User};
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Signed-in user, if any
    pub current_user: Option<User>,
    /// Cached plans for the signed-in customer
    pub plans: Vec<Plan>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the signed-in user (None on sign-out)
pub fn store_set_user(store: &AppStore, user: Option<User>) {
    *store.current_user().write() = user;
}

/// Whether the signed-in user may see the back office
pub fn store_is_staff(store: &AppStore) -> bool {
    store
        .current_user()
        .read()
        .as_ref()
        .map(|user| user.is_staff)
        .unwrap_or(false)
}

/// Update a plan in the store by ID
pub fn store_update_plan(store: &AppStore, updated_plan: Plan) {
    store
        .plans()
        .write()
        .iter_mut()
        .find(|plan| plan.id == updated_plan.id)
        .map(|plan| *plan = updated_plan);
}

/// Remove a plan from the store by ID
pub fn store_remove_plan(store: &AppStore, plan_id: u32) {
    store.plans().write().retain(|plan| plan.id != plan_id);
}
