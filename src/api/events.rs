//! Delivery Event Commands

use super::{ApiClient, ApiError};
use crate::models::DeliveryEvent;

pub async fn list_plan_events(api: &ApiClient, plan_id: u32) -> Result<Vec<DeliveryEvent>, ApiError> {
    api.get(&format!("/plans/{plan_id}/events")).await
}
