//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// Severity of a flash message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashKind {
    Info,
    Error,
}

/// Transient banner message shown below the nav bar
#[derive(Clone, Debug, PartialEq)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload data from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload data from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Current flash message - read
    pub flash: ReadSignal<Option<Flash>>,
    /// Current flash message - write
    set_flash: WriteSignal<Option<Flash>>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        flash: (ReadSignal<Option<Flash>>, WriteSignal<Option<Flash>>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            flash: flash.0,
            set_flash: flash.1,
        }
    }

    /// Trigger a reload of backend data
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Show an informational flash message
    pub fn notify(&self, message: impl Into<String>) {
        self.set_flash.set(Some(Flash {
            kind: FlashKind::Info,
            message: message.into(),
        }));
    }

    /// Show an error flash message
    pub fn notify_error(&self, message: impl Into<String>) {
        self.set_flash.set(Some(Flash {
            kind: FlashKind::Error,
            message: message.into(),
        }));
    }

    /// Dismiss the current flash message
    pub fn clear_flash(&self) {
        self.set_flash.set(None);
    }
}
