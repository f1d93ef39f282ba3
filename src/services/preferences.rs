//! Home screen preference store.
//!
//! Persists the user's customized section order/visibility and the set of
//! dismissed notice ids. The owning screen reloads these on every focus
//! transition, so edits made on the settings screen are visible immediately
//! on return.
//!
//! Reads fail open: a missing or unreadable record yields the built-in
//! defaults instead of an error.

use crate::error::AppError;
use crate::models::{default_sections, Section, SectionKey};
use serde::de::DeserializeOwned;
use std::collections::BTreeSet;

/// Store key for the ordered section list.
pub const SECTIONS_ORDER_KEY: &str = "home.sections-order";

/// Store key for the dismissed notice id set.
pub const DISMISSED_NOTICE_IDS_KEY: &str = "home.dismissed-notice-ids";

/// Generic key-value persistence backing the preference store.
///
/// Production uses the tauri-plugin-store JSON store; tests use an
/// in-memory map. Writes are last-write-wins on the stored blob.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError>;
}

/// Home preferences as loaded from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomePreferences {
    /// Sections in display order.
    pub sections: Vec<Section>,

    /// Notice ids the user has dismissed from the home banner.
    pub dismissed_notice_ids: BTreeSet<String>,
}

impl Default for HomePreferences {
    fn default() -> Self {
        Self {
            sections: default_sections(),
            dismissed_notice_ids: BTreeSet::new(),
        }
    }
}

/// Owns the section ordering and dismissed-notice set in local storage.
///
/// No other component writes these keys.
pub struct PreferenceStore<S> {
    store: S,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load home preferences, substituting defaults for anything missing
    /// or unreadable.
    pub fn load(&self) -> HomePreferences {
        let sections = match self.read_json::<Vec<Section>>(SECTIONS_ORDER_KEY) {
            Some(stored) => normalize_sections(stored),
            None => default_sections(),
        };

        let dismissed_notice_ids = self
            .read_json::<BTreeSet<String>>(DISMISSED_NOTICE_IDS_KEY)
            .unwrap_or_default();

        HomePreferences {
            sections,
            dismissed_notice_ids,
        }
    }

    /// Overwrite the stored section ordering.
    ///
    /// Called by the home screen settings editor.
    pub fn save_sections(&self, sections: &[Section]) -> Result<(), AppError> {
        let value = serde_json::to_string(sections)?;
        self.store.set_item(SECTIONS_ORDER_KEY, &value)
    }

    /// Add `id` to the dismissed notice set and persist the full set.
    ///
    /// Idempotent: dismissing the same id twice stores it once.
    pub fn dismiss_notice(&self, id: &str) -> Result<(), AppError> {
        let mut dismissed = self
            .read_json::<BTreeSet<String>>(DISMISSED_NOTICE_IDS_KEY)
            .unwrap_or_default();
        dismissed.insert(id.to_string());

        let value = serde_json::to_string(&dismissed)?;
        self.store.set_item(DISMISSED_NOTICE_IDS_KEY, &value)
    }

    /// Read and parse a stored JSON value, treating read and parse
    /// failures the same as "no data".
    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get_item(key) {
            Ok(raw) => raw?,
            Err(e) => {
                log::warn!("[prefs] Failed to read {}: {}", key, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("[prefs] Ignoring unreadable value for {}: {}", key, e);
                None
            }
        }
    }
}

/// Reconcile a stored section list against the fixed key set.
///
/// Duplicate keys are dropped (first occurrence wins) and keys missing
/// from the stored list are appended from the defaults, so every known
/// key appears exactly once even across app updates.
fn normalize_sections(stored: Vec<Section>) -> Vec<Section> {
    let mut seen: Vec<SectionKey> = Vec::new();
    let mut sections = Vec::new();

    for section in stored {
        if seen.contains(&section.key) {
            continue;
        }
        seen.push(section.key);
        sections.push(section);
    }

    for default in default_sections() {
        if !seen.contains(&default.key) {
            sections.push(default);
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryStore {
        items: Mutex<HashMap<String, String>>,
    }

    impl KeyValueStore for MemoryStore {
        fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
            Ok(self.items.lock().unwrap().get(key).cloned())
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
            self.items
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    /// Store whose reads always fail, for the fail-open path.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
            Err(AppError::preferences_with_key("disk unavailable", key))
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), AppError> {
            Err(AppError::preferences("disk unavailable"))
        }
    }

    #[test]
    fn test_load_without_stored_data_returns_defaults() {
        let prefs = PreferenceStore::new(MemoryStore::default());
        let loaded = prefs.load();
        assert_eq!(loaded.sections, default_sections());
        assert_eq!(loaded.sections.len(), 3);
        assert!(loaded.sections.iter().all(|s| s.enabled));
        assert!(loaded.dismissed_notice_ids.is_empty());
    }

    #[test]
    fn test_sections_round_trip_preserves_order() {
        let prefs = PreferenceStore::new(MemoryStore::default());

        let mut reordered = default_sections();
        reordered.rotate_left(1); // prayerRequest, board, fellowship
        prefs.save_sections(&reordered).unwrap();

        assert_eq!(prefs.load().sections, reordered);
    }

    #[test]
    fn test_disabled_section_round_trip() {
        let prefs = PreferenceStore::new(MemoryStore::default());

        let mut sections = default_sections();
        sections[2].enabled = false; // board
        prefs.save_sections(&sections).unwrap();

        let loaded = prefs.load();
        assert_eq!(loaded.sections[2].key, SectionKey::Board);
        assert!(!loaded.sections[2].enabled);
        assert!(loaded.sections[0].enabled);
        assert!(loaded.sections[1].enabled);
    }

    #[test]
    fn test_unparseable_sections_fall_back_to_defaults() {
        let store = MemoryStore::default();
        store.set_item(SECTIONS_ORDER_KEY, "not json {").unwrap();

        let prefs = PreferenceStore::new(store);
        assert_eq!(prefs.load().sections, default_sections());
    }

    #[test]
    fn test_read_failure_falls_back_to_defaults() {
        let prefs = PreferenceStore::new(BrokenStore);
        let loaded = prefs.load();
        assert_eq!(loaded.sections, default_sections());
        assert!(loaded.dismissed_notice_ids.is_empty());
    }

    #[test]
    fn test_dismiss_notice_is_idempotent() {
        let prefs = PreferenceStore::new(MemoryStore::default());

        prefs.dismiss_notice("notice-1").unwrap();
        prefs.dismiss_notice("notice-1").unwrap();

        let dismissed = prefs.load().dismissed_notice_ids;
        assert_eq!(dismissed.len(), 1);
        assert!(dismissed.contains("notice-1"));
    }

    #[test]
    fn test_dismissed_set_grows_across_notices() {
        let prefs = PreferenceStore::new(MemoryStore::default());

        prefs.dismiss_notice("notice-1").unwrap();
        prefs.dismiss_notice("notice-2").unwrap();

        let dismissed = prefs.load().dismissed_notice_ids;
        assert_eq!(dismissed.len(), 2);
    }

    #[test]
    fn test_normalize_appends_missing_keys() {
        let stored: Vec<Section> = default_sections().into_iter().take(2).collect();
        let normalized = normalize_sections(stored);

        assert_eq!(normalized.len(), 3);
        assert_eq!(normalized[2].key, SectionKey::Board);
    }

    #[test]
    fn test_normalize_drops_duplicate_keys() {
        let mut stored = default_sections();
        stored.push(stored[0].clone());
        let normalized = normalize_sections(stored);

        assert_eq!(normalized.len(), 3);
        assert_eq!(normalized[0].key, SectionKey::Fellowship);
    }
}
