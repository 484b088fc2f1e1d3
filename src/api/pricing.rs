//! Pricing Commands
//!
//! Binding for the backend price calculation service. Pricing rules live
//! entirely server-side; the frontend only submits the input tuple.

use super::{ApiClient, ApiError};
use crate::models::{PriceQuote, QuoteParams};

pub async fn calculate(api: &ApiClient, params: &QuoteParams) -> Result<PriceQuote, ApiError> {
    api.post("/pricing/calculate", params).await
}
