//! Push messaging commands.
//!
//! Permission handling goes through the notification plugin; the device
//! push token itself is issued by the platform push service and handed in
//! by the frontend, this layer only forwards it to the API.

use crate::error::AppError;
use crate::services::api_client::RegisterDeviceRequest;
use tauri::AppHandle;
use tauri_plugin_notification::{NotificationExt, PermissionState};

/// Check whether notification permission has been granted.
#[tauri::command]
pub async fn get_notification_permission(app: AppHandle) -> Result<bool, AppError> {
    let state = app
        .notification()
        .permission_state()
        .map_err(|e| AppError::internal(format!("Failed to read permission state: {}", e)))?;

    Ok(matches!(state, PermissionState::Granted))
}

/// Prompt the user for notification permission.
#[tauri::command]
pub async fn request_notification_permission(app: AppHandle) -> Result<bool, AppError> {
    let state = app
        .notification()
        .request_permission()
        .map_err(|e| AppError::internal(format!("Failed to request permission: {}", e)))?;

    Ok(matches!(state, PermissionState::Granted))
}

/// Register this device's push token with the API.
#[tauri::command]
pub async fn register_push_token(token: String, platform: String) -> Result<(), AppError> {
    if token.trim().is_empty() {
        return Err(AppError::invalid_input_field("Token is required", "token"));
    }

    let client = super::session_client()?;
    client
        .register_push_token(&RegisterDeviceRequest { token, platform })
        .await
}
