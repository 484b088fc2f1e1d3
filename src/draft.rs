//! Draft Store
//!
//! Client-side durable draft persistence for multi-step forms. One key per
//! logical draft; values are JSON.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Local storage key for the plan wizard draft
pub const PLAN_DRAFT_KEY: &str = "bloombox.plan_draft.v1";

/// Persistent key-value medium for in-progress form state
pub trait DraftStore {
    fn load_raw(&self, key: &str) -> Option<String>;
    fn save_raw(&self, key: &str, raw: &str) -> bool;
    fn clear(&self, key: &str);

    /// Load and decode a draft. Corrupted payloads are dropped and cleared.
    fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T>
    where
        Self: Sized,
    {
        let raw = self.load_raw(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(_) => {
                self.clear(key);
                None
            }
        }
    }

    /// Encode and persist a draft; false if the medium refused the write
    fn save<T: Serialize>(&self, key: &str, value: &T) -> bool
    where
        Self: Sized,
    {
        match serde_json::to_string(value) {
            Ok(raw) => self.save_raw(key, &raw),
            Err(_) => false,
        }
    }
}

/// Browser localStorage backing
pub struct LocalStorageDrafts;

impl LocalStorageDrafts {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl DraftStore for LocalStorageDrafts {
    fn load_raw(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn save_raw(&self, key: &str, raw: &str) -> bool {
        Self::storage()
            .map(|s| s.set_item(key, raw).is_ok())
            .unwrap_or(false)
    }

    fn clear(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory backing for tests and non-browser hosts
#[derive(Default)]
pub struct MemoryDrafts {
    entries: RefCell<HashMap<String, String>>,
}

impl DraftStore for MemoryDrafts {
    fn load_raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn save_raw(&self, key: &str, raw: &str) -> bool {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
        true
    }

    fn clear(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlanKind, WizardDraft, WizardStep};

    #[test]
    fn draft_round_trips_mid_wizard_state() {
        let store = MemoryDrafts::default();
        let draft = WizardDraft {
            step: WizardStep::Schedule,
            kind: Some(PlanKind::Subscription),
            recipient_name: "Mara".into(),
            budget: 85.0,
            ..WizardDraft::default()
        };

        assert!(store.save(PLAN_DRAFT_KEY, &draft));
        let restored: WizardDraft = store.load(PLAN_DRAFT_KEY).expect("draft should restore");
        assert_eq!(restored, draft);
    }

    #[test]
    fn corrupted_draft_is_dropped_and_cleared() {
        let store = MemoryDrafts::default();
        store.save_raw(PLAN_DRAFT_KEY, "{not json");

        let restored: Option<WizardDraft> = store.load(PLAN_DRAFT_KEY);
        assert!(restored.is_none());
        // The bad payload must not survive to poison later loads
        assert!(store.load_raw(PLAN_DRAFT_KEY).is_none());
    }

    #[test]
    fn clear_removes_the_draft() {
        let store = MemoryDrafts::default();
        store.save(PLAN_DRAFT_KEY, &WizardDraft::default());
        store.clear(PLAN_DRAFT_KEY);
        let restored: Option<WizardDraft> = store.load(PLAN_DRAFT_KEY);
        assert!(restored.is_none());
    }

    #[test]
    fn missing_key_loads_as_none() {
        let store = MemoryDrafts::default();
        let restored: Option<WizardDraft> = store.load("bloombox.other_draft.v1");
        assert!(restored.is_none());
    }
}
