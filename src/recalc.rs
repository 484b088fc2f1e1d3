//! Debounced Price Recalculation
//!
//! Coalesces rapid budget/frequency/duration edits into one delayed call to
//! the backend price calculation service. Last input wins, stale responses
//! are discarded, and a failure keeps the last good quote on screen.

use std::pin::pin;

use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_debounce::{use_debounced, DebounceHandle, Generation};
use thiserror::Error;

use crate::api::{self, ApiClient, ApiError};
use crate::models::{PriceQuote, QuoteParams};

/// Quiet period after the last input change before the request fires.
/// A tuning default, not a load-bearing constant.
pub const QUIET_PERIOD_MS: u32 = 500;
/// Upper bound on a single calculation request
pub const REQUEST_TIMEOUT_MS: u32 = 12_000;

const MAX_BUDGET: f64 = 10_000.0;
const MAX_YEARS: u32 = 5;
const MAX_DELIVERIES_PER_YEAR: u32 = 52;

/// Why a recalculation produced no usable amount
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    /// Inputs failed local sanity checks; nothing was sent to the network
    #[error("{0}")]
    Validation(String),
    /// The backend rejected or failed the calculation
    #[error("{0}")]
    Calculation(String),
    /// No response within the request budget
    #[error("price calculation timed out, please try again")]
    Timeout,
}

impl From<ApiError> for CalculationError {
    fn from(error: ApiError) -> Self {
        CalculationError::Calculation(error.to_string())
    }
}

/// Local sanity checks; failures never reach the network
pub fn validate_params(params: &QuoteParams) -> Result<(), CalculationError> {
    if !params.budget.is_finite() || params.budget <= 0.0 {
        return Err(CalculationError::Validation(
            "budget must be a positive amount".into(),
        ));
    }
    if params.budget > MAX_BUDGET {
        return Err(CalculationError::Validation(format!(
            "budget cannot exceed {MAX_BUDGET:.0}"
        )));
    }
    if let Some(years) = params.years {
        if years == 0 || years > MAX_YEARS {
            return Err(CalculationError::Validation(format!(
                "duration must be between 1 and {MAX_YEARS} years"
            )));
        }
    }
    if let Some(per_year) = params.deliveries_per_year {
        if per_year == 0 || per_year > MAX_DELIVERIES_PER_YEAR {
            return Err(CalculationError::Validation(format!(
                "deliveries per year must be between 1 and {MAX_DELIVERIES_PER_YEAR}"
            )));
        }
    }
    Ok(())
}

/// Debounced recalculation session, owned by one component instance.
///
/// States: idle -> pending (on schedule) -> calculating (on timer fire) ->
/// idle-with-result or idle-with-error. A schedule while pending or
/// calculating returns to pending and supersedes the in-flight request.
///
/// Copy, so it can move freely into view closures; the timer machinery
/// lives in local stored values.
#[derive(Clone, Copy)]
pub struct PriceRecalc {
    handle: StoredValue<DebounceHandle<QuoteParams>, LocalStorage>,
    generation: StoredValue<Generation, LocalStorage>,
    pending: ReadSignal<bool>,
    quote: ReadSignal<Option<PriceQuote>>,
    error: ReadSignal<Option<CalculationError>>,
    calculating: ReadSignal<bool>,
    set_calculating: WriteSignal<bool>,
}

impl PriceRecalc {
    /// Record the latest inputs and (re)start the quiet period
    pub fn schedule(&self, params: QuoteParams) {
        // Anything still in flight is stale the moment new input arrives
        self.generation.with_value(|generation| generation.invalidate());
        self.handle.with_value(|handle| handle.schedule(params));
    }

    /// Stop without firing. Idempotent; also runs on unmount, where the
    /// stored values may already be gone.
    pub fn cancel(&self) {
        let _ = self.handle.try_with_value(|handle| handle.cancel());
        let _ = self
            .generation
            .try_with_value(|generation| generation.invalidate());
        if self.calculating.try_get_untracked() == Some(true) {
            self.set_calculating.set(false);
        }
    }

    /// True between schedule() and the quiet period elapsing
    pub fn debounce_pending(&self) -> ReadSignal<bool> {
        self.pending
    }

    /// True while the network request is in flight
    pub fn calculating(&self) -> ReadSignal<bool> {
        self.calculating
    }

    /// Last successfully computed quote; retained across later failures
    pub fn quote(&self) -> ReadSignal<Option<PriceQuote>> {
        self.quote
    }

    pub fn error(&self) -> ReadSignal<Option<CalculationError>> {
        self.error
    }
}

/// Create a recalculation session bound to the current component
pub fn use_price_recalc(api: ApiClient) -> PriceRecalc {
    let (quote, set_quote) = signal(None::<PriceQuote>);
    let (error, set_error) = signal(None::<CalculationError>);
    let (calculating, set_calculating) = signal(false);
    let generation = Generation::default();

    let handle = {
        let generation = generation.clone();
        use_debounced(QUIET_PERIOD_MS, move |params: QuoteParams| {
            if let Err(invalid) = validate_params(&params) {
                set_calculating.set(false);
                set_error.set(Some(invalid));
                return;
            }

            let token = generation.next();
            set_calculating.set(true);
            set_error.set(None);

            let generation = generation.clone();
            spawn_local(async move {
                let outcome = calculate_with_timeout(&api, &params).await;
                if !generation.is_current(token) {
                    // Superseded while in flight; a newer request owns the UI now
                    web_sys::console::log_1(&"[RECALC] stale result discarded".into());
                    return;
                }
                set_calculating.set(false);
                match outcome {
                    Ok(fresh) => set_quote.set(Some(fresh)),
                    // The last good quote stays visible next to the error
                    Err(failed) => set_error.set(Some(failed)),
                }
            });
        })
    };

    let pending = handle.pending();
    let session = PriceRecalc {
        handle: StoredValue::new_local(handle),
        generation: StoredValue::new_local(generation),
        pending,
        quote,
        error,
        calculating,
        set_calculating,
    };
    on_cleanup(move || session.cancel());
    session
}

async fn calculate_with_timeout(
    api: &ApiClient,
    params: &QuoteParams,
) -> Result<PriceQuote, CalculationError> {
    let request = pin!(api::calculate(api, params));
    let deadline = pin!(TimeoutFuture::new(REQUEST_TIMEOUT_MS));
    match select(request, deadline).await {
        Either::Left((result, _)) => result.map_err(CalculationError::from),
        Either::Right(((), _)) => Err(CalculationError::Timeout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DeliveryFrequency;

    fn subscription_params(budget: f64) -> QuoteParams {
        QuoteParams {
            budget,
            frequency: Some(DeliveryFrequency::Monthly),
            deliveries_per_year: None,
            years: None,
        }
    }

    #[test]
    fn typical_inputs_pass_validation() {
        assert!(validate_params(&subscription_params(75.0)).is_ok());
        assert!(validate_params(&QuoteParams {
            budget: 120.0,
            frequency: None,
            deliveries_per_year: Some(26),
            years: Some(3),
        })
        .is_ok());
    }

    #[test]
    fn non_positive_budget_is_rejected_locally() {
        for budget in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            let result = validate_params(&subscription_params(budget));
            assert!(
                matches!(result, Err(CalculationError::Validation(_))),
                "budget {budget} should fail validation"
            );
        }
    }

    #[test]
    fn out_of_range_duration_is_rejected_locally() {
        let mut params = subscription_params(75.0);
        params.years = Some(0);
        assert!(matches!(
            validate_params(&params),
            Err(CalculationError::Validation(_))
        ));
        params.years = Some(MAX_YEARS + 1);
        assert!(matches!(
            validate_params(&params),
            Err(CalculationError::Validation(_))
        ));
    }

    #[test]
    fn out_of_range_cadence_is_rejected_locally() {
        let mut params = subscription_params(75.0);
        params.deliveries_per_year = Some(0);
        assert!(validate_params(&params).is_err());
        params.deliveries_per_year = Some(MAX_DELIVERIES_PER_YEAR + 1);
        assert!(validate_params(&params).is_err());
    }

    #[test]
    fn api_errors_map_to_calculation_errors() {
        let mapped = CalculationError::from(ApiError::Network("connection reset".into()));
        assert_eq!(
            mapped,
            CalculationError::Calculation("network error: connection reset".into())
        );
    }
}
