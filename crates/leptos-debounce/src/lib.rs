//! Leptos Debounce Utilities
//!
//! Coalesces rapid input changes into one delayed callback invocation.
//! Last input wins: re-arming the quiet period clears the previous timer.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Monotonic counter for tagging async work.
///
/// Clones share the counter. A completion whose token is no longer current
/// has been superseded and its result must be discarded.
#[derive(Clone, Debug, Default)]
pub struct Generation(Rc<Cell<u64>>);

impl Generation {
    /// Advance the counter and return the new token
    pub fn next(&self) -> u64 {
        self.0.set(self.0.get() + 1);
        self.0.get()
    }

    /// Latest issued token
    pub fn current(&self) -> u64 {
        self.0.get()
    }

    /// Whether `token` is still the latest
    pub fn is_current(&self, token: u64) -> bool {
        self.0.get() == token
    }

    /// Supersede all outstanding tokens
    pub fn invalidate(&self) {
        self.0.set(self.0.get() + 1);
    }
}

struct Inner<P> {
    delay_ms: u32,
    timer: RefCell<Option<Timeout>>,
    latest: RefCell<Option<P>>,
    pending: RwSignal<bool>,
    action: Box<dyn Fn(P)>,
}

/// Handle to a debounced callback.
///
/// `schedule` records the latest params and (re)starts the quiet-period
/// timer; the wrapped action runs at most once per quiet period, with the
/// last recorded params. At most one timer is live per handle.
pub struct DebounceHandle<P: 'static> {
    inner: Rc<Inner<P>>,
}

impl<P> Clone for DebounceHandle<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<P: 'static> DebounceHandle<P> {
    pub fn new(delay_ms: u32, action: impl Fn(P) + 'static) -> Self {
        Self {
            inner: Rc::new(Inner {
                delay_ms,
                timer: RefCell::new(None),
                latest: RefCell::new(None),
                pending: RwSignal::new(false),
                action: Box::new(action),
            }),
        }
    }

    /// Record `params` as the latest input and (re)start the quiet period.
    ///
    /// A previously armed, not-yet-fired timer is cleared before the new one
    /// is armed, so a burst of calls produces a single invocation.
    pub fn schedule(&self, params: P) {
        self.inner.latest.replace(Some(params));
        self.inner.pending.set(true);

        let inner = Rc::clone(&self.inner);
        let armed = Timeout::new(self.inner.delay_ms, move || {
            // The spent timer stays in its slot until the next
            // schedule/cancel replaces it.
            inner.pending.set(false);
            if let Some(params) = inner.latest.replace(None) {
                (inner.action)(params);
            }
        });

        // Dropping the previous Timeout clears it.
        self.inner.timer.replace(Some(armed));
    }

    /// Clear any pending timer without invoking the action. Idempotent.
    pub fn cancel(&self) {
        self.inner.timer.replace(None);
        self.inner.latest.replace(None);
        if self.inner.pending.get_untracked() {
            self.inner.pending.set(false);
        }
    }

    /// True between `schedule()` and the timer firing or being cancelled
    pub fn pending(&self) -> ReadSignal<bool> {
        self.inner.pending.read_only()
    }

    /// Quiet period in milliseconds
    pub fn delay_ms(&self) -> u32 {
        self.inner.delay_ms
    }
}

/// Create a debounced handle owned by the current component.
///
/// Registers cancellation with `on_cleanup` so no callback fires into an
/// unmounted view.
pub fn use_debounced<P: 'static>(
    delay_ms: u32,
    action: impl Fn(P) + 'static,
) -> DebounceHandle<P> {
    let handle = DebounceHandle::new(delay_ms, action);
    // The handle holds an `Rc`, so it is neither `Send` nor `Sync`; park it in
    // a thread-local stored value so the `on_cleanup` closure (which requires
    // `Send + Sync`) captures only the `Copy` handle id.
    let on_unmount = StoredValue::new_local(handle.clone());
    on_cleanup(move || {
        let _ = on_unmount.try_with_value(|handle| handle.cancel());
    });
    handle
}

#[cfg(test)]
mod tests {
    use super::Generation;

    #[test]
    fn generation_tokens_are_monotonic() {
        let generation = Generation::default();
        let first = generation.next();
        let second = generation.next();
        assert!(second > first);
        assert!(generation.is_current(second));
        assert!(!generation.is_current(first));
    }

    #[test]
    fn invalidate_supersedes_outstanding_tokens() {
        let generation = Generation::default();
        let token = generation.next();
        generation.invalidate();
        assert!(!generation.is_current(token));
        assert!(generation.is_current(generation.current()));
    }

    #[test]
    fn clones_share_the_counter() {
        let generation = Generation::default();
        let other = generation.clone();
        let token = generation.next();
        assert!(other.is_current(token));
        other.invalidate();
        assert!(!generation.is_current(token));
    }
}
