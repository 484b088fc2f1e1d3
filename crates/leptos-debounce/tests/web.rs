//! Browser tests for debounce timing, coalescing and cancellation.

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_debounce::DebounceHandle;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn recording_handle(delay_ms: u32) -> (DebounceHandle<u32>, Rc<RefCell<Vec<u32>>>) {
    let fired: Rc<RefCell<Vec<u32>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&fired);
    let handle = DebounceHandle::new(delay_ms, move |v: u32| sink.borrow_mut().push(v));
    (handle, fired)
}

#[wasm_bindgen_test]
async fn burst_fires_once_with_last_input() {
    let (handle, fired) = recording_handle(50);

    handle.schedule(75);
    TimeoutFuture::new(10).await;
    handle.schedule(100);
    TimeoutFuture::new(10).await;
    handle.schedule(150);

    TimeoutFuture::new(150).await;
    assert_eq!(*fired.borrow(), vec![150]);
}

#[wasm_bindgen_test]
async fn quiet_period_holds_fire() {
    let (handle, fired) = recording_handle(100);

    handle.schedule(1);
    TimeoutFuture::new(40).await;
    assert!(fired.borrow().is_empty());
    assert!(handle.pending().get_untracked());

    TimeoutFuture::new(120).await;
    assert_eq!(*fired.borrow(), vec![1]);
    assert!(!handle.pending().get_untracked());
}

#[wasm_bindgen_test]
async fn cancel_is_idempotent_and_final() {
    let (handle, fired) = recording_handle(30);

    // Cancel with no timer armed must be a no-op
    handle.cancel();

    handle.schedule(5);
    handle.cancel();
    handle.cancel();

    TimeoutFuture::new(100).await;
    assert!(fired.borrow().is_empty());
    assert!(!handle.pending().get_untracked());
}

#[wasm_bindgen_test]
async fn rescheduling_after_fire_runs_again() {
    let (handle, fired) = recording_handle(30);

    handle.schedule(1);
    TimeoutFuture::new(80).await;
    handle.schedule(2);
    TimeoutFuture::new(80).await;

    assert_eq!(*fired.borrow(), vec![1, 2]);
}
