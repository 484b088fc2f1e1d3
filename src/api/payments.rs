//! Payment Commands
//!
//! The payment processor is integrated backend-side; the frontend only
//! requests a checkout session and follows the returned redirect URL.

use serde::Serialize;

use super::{ApiClient, ApiError};
use crate::models::CheckoutSession;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckoutArgs {
    plan_id: u32,
    success_url: String,
    cancel_url: String,
}

pub async fn create_checkout(api: &ApiClient, plan_id: u32) -> Result<CheckoutSession, ApiError> {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:8080".into());

    let args = CheckoutArgs {
        plan_id,
        success_url: format!("{origin}/checkout/return?planId={plan_id}"),
        cancel_url: format!("{origin}/plans/{plan_id}"),
    };
    api.post("/payments/checkout", &args).await
}
