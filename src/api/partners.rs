//! Partner Commands
//!
//! Bindings for the signed-in partner's own profile and earnings.

use super::{ApiClient, ApiError};
use crate::models::{Commission, Partner};

pub async fn partner_profile(api: &ApiClient) -> Result<Partner, ApiError> {
    api.get("/partners/me").await
}

pub async fn partner_commissions(api: &ApiClient) -> Result<Vec<Commission>, ApiError> {
    api.get("/partners/me/commissions").await
}
