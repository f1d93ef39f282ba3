//! Home section commands.
//!
//! The section order and visibility live in the preference store backed by
//! tauri-plugin-store. The home screen reloads them on every focus, so the
//! settings editor and the home screen stay consistent without any push
//! mechanism between them.

use crate::error::AppError;
use crate::models::Section;
use crate::services::preferences::{KeyValueStore, PreferenceStore};
use std::sync::Arc;
use tauri::{AppHandle, Wry};
use tauri_plugin_store::{Store, StoreExt};

/// Store filename for home preferences.
const PREFERENCES_STORE: &str = "preferences.json";

/// Key-value adapter over the tauri-plugin-store JSON store.
pub struct TauriKeyValueStore {
    store: Arc<Store<Wry>>,
}

impl KeyValueStore for TauriKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self
            .store
            .get(key)
            .and_then(|value| value.as_str().map(|s| s.to_string())))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.store
            .set(key, serde_json::Value::String(value.to_string()));

        // Persist to disk
        self.store
            .save()
            .map_err(|e| AppError::preferences_with_key(format!("Failed to save: {}", e), key))
    }
}

/// Open the preference store for this app.
pub(crate) fn preference_store(
    app: &AppHandle,
) -> Result<PreferenceStore<TauriKeyValueStore>, AppError> {
    let store = app
        .store(PREFERENCES_STORE)
        .map_err(|e| AppError::preferences(format!("Failed to open preference store: {}", e)))?;

    Ok(PreferenceStore::new(TauriKeyValueStore { store }))
}

/// Get the stored home section list, defaults included.
///
/// Called by the home screen on focus and by the section settings editor.
#[tauri::command]
pub async fn get_home_sections(app: AppHandle) -> Result<Vec<Section>, AppError> {
    Ok(preference_store(&app)?.load().sections)
}

/// Overwrite the stored home section order.
///
/// Called by the section settings editor after a reorder or toggle.
#[tauri::command]
pub async fn save_home_sections(app: AppHandle, sections: Vec<Section>) -> Result<(), AppError> {
    if sections.is_empty() {
        return Err(AppError::invalid_input_field(
            "Section list cannot be empty",
            "sections",
        ));
    }

    preference_store(&app)?.save_sections(&sections)
}
