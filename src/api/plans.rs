//! Plan Commands
//!
//! CRUD bindings for flower plans.

use super::{ApiClient, ApiError};
use crate::models::{NewPlanRequest, Plan, PlanUpdate};

pub async fn list_plans(api: &ApiClient) -> Result<Vec<Plan>, ApiError> {
    api.get("/plans").await
}

pub async fn get_plan(api: &ApiClient, id: u32) -> Result<Plan, ApiError> {
    api.get(&format!("/plans/{id}")).await
}

pub async fn create_plan(api: &ApiClient, request: &NewPlanRequest) -> Result<Plan, ApiError> {
    api.post("/plans", request).await
}

pub async fn update_plan(api: &ApiClient, id: u32, update: &PlanUpdate) -> Result<Plan, ApiError> {
    api.patch(&format!("/plans/{id}"), update).await
}

pub async fn cancel_plan(api: &ApiClient, id: u32) -> Result<Plan, ApiError> {
    api.post_action(&format!("/plans/{id}/cancel")).await
}
