//! Admin notice commands.

use crate::error::AppError;
use crate::models::Notice;
use tauri::AppHandle;

/// Get the notices eligible for the home banner, newest first.
#[tauri::command]
pub async fn get_main_notices() -> Result<Vec<Notice>, AppError> {
    let client = super::session_client()?;
    client.get_main_notices().await
}

/// Hide a notice from the home banner permanently on this device.
#[tauri::command]
pub async fn dismiss_notice(app: AppHandle, id: String) -> Result<(), AppError> {
    super::sections::preference_store(&app)?.dismiss_notice(&id)
}
