//! Admin Commands
//!
//! Back-office bindings for fulfillment staff: the delivery queue and
//! partner/commission management.

use serde::Serialize;

use super::{ApiClient, ApiError};
use crate::models::{Commission, DeliveryEvent, Partner};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPartnerArgs<'a> {
    pub name: &'a str,
    pub commission_rate: f64,
}

pub async fn list_delivery_queue(api: &ApiClient) -> Result<Vec<DeliveryEvent>, ApiError> {
    api.get("/admin/events").await
}

pub async fn mark_event_delivered(api: &ApiClient, id: u32) -> Result<DeliveryEvent, ApiError> {
    api.post_action(&format!("/admin/events/{id}/deliver")).await
}

pub async fn mark_event_skipped(api: &ApiClient, id: u32) -> Result<DeliveryEvent, ApiError> {
    api.post_action(&format!("/admin/events/{id}/skip")).await
}

pub async fn admin_list_partners(api: &ApiClient) -> Result<Vec<Partner>, ApiError> {
    api.get("/admin/partners").await
}

pub async fn admin_create_partner(
    api: &ApiClient,
    args: &NewPartnerArgs<'_>,
) -> Result<Partner, ApiError> {
    api.post("/admin/partners", args).await
}

pub async fn admin_list_commissions(api: &ApiClient) -> Result<Vec<Commission>, ApiError> {
    api.get("/admin/commissions").await
}

pub async fn mark_commission_paid(api: &ApiClient, id: u32) -> Result<Commission, ApiError> {
    api.post_action(&format!("/admin/commissions/{id}/pay")).await
}
