//! Bounded Polling
//!
//! Waits for a backend-driven state transition by probing an endpoint a
//! fixed number of times with a fixed interval in between.

use std::future::Future;

use gloo_timers::future::TimeoutFuture;

/// Polling cadence. The defaults are product-tuning values, not
/// load-bearing constants; call sites may override them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollConfig {
    pub interval_ms: u32,
    pub max_attempts: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_ms: 2000,
            max_attempts: 15,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PollOutcome<T> {
    /// The probe produced a value within the attempt budget
    Ready(T),
    /// All attempts were used without a value
    GaveUp,
}

/// Probe until a value appears or the attempt budget runs out.
///
/// The probe runs immediately, then once per interval. A probe that yields
/// None (not-yet state or a swallowed fetch error) consumes one attempt.
pub async fn poll_until<T, F, Fut>(config: PollConfig, probe: F) -> PollOutcome<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Option<T>>,
{
    poll_until_with(config, probe, |ms| TimeoutFuture::new(ms)).await
}

async fn poll_until_with<T, F, Fut, D, DFut>(
    config: PollConfig,
    mut probe: F,
    delay: D,
) -> PollOutcome<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Option<T>>,
    D: Fn(u32) -> DFut,
    DFut: Future<Output = ()>,
{
    for attempt in 1..=config.max_attempts {
        if let Some(value) = probe(attempt).await {
            return PollOutcome::Ready(value);
        }
        if attempt < config.max_attempts {
            delay(config.interval_ms).await;
        }
    }
    PollOutcome::GaveUp
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    async fn no_delay(_ms: u32) {}

    #[test]
    fn ready_as_soon_as_the_probe_succeeds() {
        let outcome = block_on(poll_until_with(
            PollConfig {
                interval_ms: 1,
                max_attempts: 5,
            },
            |attempt| async move { (attempt == 3).then_some("active") },
            no_delay,
        ));
        assert_eq!(outcome, PollOutcome::Ready("active"));
    }

    #[test]
    fn gives_up_after_max_attempts() {
        let probes = Cell::new(0u32);
        let outcome: PollOutcome<()> = block_on(poll_until_with(
            PollConfig {
                interval_ms: 1,
                max_attempts: 4,
            },
            |_| {
                probes.set(probes.get() + 1);
                async { None }
            },
            no_delay,
        ));
        assert_eq!(outcome, PollOutcome::GaveUp);
        assert_eq!(probes.get(), 4);
    }

    #[test]
    fn waits_between_attempts_but_not_after_the_last() {
        let delays = Cell::new(0u32);
        let outcome: PollOutcome<()> = block_on(poll_until_with(
            PollConfig {
                interval_ms: 7,
                max_attempts: 3,
            },
            |_| async { None },
            |_| {
                delays.set(delays.get() + 1);
                async {}
            },
        ));
        assert_eq!(outcome, PollOutcome::GaveUp);
        assert_eq!(delays.get(), 2);
    }
}
