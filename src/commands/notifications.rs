//! Notification commands.
//!
//! The notification list, read-state mutations, and the OS badge are all
//! mediated by the [`NotificationCenter`] held in app state; every mutation
//! here also refreshes the cached list so the badge re-syncs.

use crate::error::AppError;
use crate::models::Notification;
use crate::services::notification_center::{BadgeSink, NotificationCenter};
use tauri::{AppHandle, Manager, State};
use tauri_plugin_notification::NotificationExt;

/// Badge sink writing to the OS-level app badge.
pub struct AppBadge {
    app: AppHandle,
}

impl AppBadge {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl BadgeSink for AppBadge {
    fn set_count(&self, count: usize) -> Result<(), AppError> {
        let window = self
            .app
            .get_webview_window("main")
            .ok_or_else(|| AppError::internal("Main window not available"))?;

        // A zero count clears the badge instead of rendering a literal 0.
        let value = if count == 0 { None } else { Some(count as i64) };

        window
            .set_badge_count(value)
            .map_err(|e| AppError::internal(format!("Failed to set badge count: {}", e)))
    }
}

/// Shared notification state managed by the Tauri app.
pub type SharedNotificationCenter = NotificationCenter<AppBadge>;

/// Fetch the notification list from the API, replacing the local cache.
#[tauri::command]
pub async fn refresh_notifications(
    center: State<'_, SharedNotificationCenter>,
) -> Result<Vec<Notification>, AppError> {
    let client = super::session_client()?;
    center.refresh(&client).await
}

/// Get the cached notification list without hitting the network.
#[tauri::command]
pub async fn get_notifications(
    center: State<'_, SharedNotificationCenter>,
) -> Result<Vec<Notification>, AppError> {
    Ok(center.notifications().await)
}

/// Count of unread notifications in the cached list.
#[tauri::command]
pub async fn get_unread_count(
    center: State<'_, SharedNotificationCenter>,
) -> Result<usize, AppError> {
    Ok(center.unread_count().await)
}

/// Mark one notification read.
#[tauri::command]
pub async fn mark_notification_as_read(
    center: State<'_, SharedNotificationCenter>,
    id: String,
) -> Result<(), AppError> {
    let client = super::session_client()?;
    center.mark_as_read(&client, &id).await
}

/// Mark every notification read.
#[tauri::command]
pub async fn mark_all_notifications_as_read(
    center: State<'_, SharedNotificationCenter>,
) -> Result<(), AppError> {
    let client = super::session_client()?;
    center.mark_all_as_read(&client).await
}

/// Delete one notification, returning the removed record.
#[tauri::command]
pub async fn delete_notification(
    center: State<'_, SharedNotificationCenter>,
    id: String,
) -> Result<Notification, AppError> {
    let client = super::session_client()?;
    center.delete(&client, &id).await
}

/// Send a native OS notification.
///
/// Used to surface push messages received while the app is foregrounded.
#[tauri::command]
pub async fn send_native_notification(
    app: AppHandle,
    title: String,
    body: String,
) -> Result<(), AppError> {
    app.notification()
        .builder()
        .title(&title)
        .body(&body)
        .sound("default")
        .show()
        .map_err(|e| AppError::internal(format!("Failed to send notification: {}", e)))?;
    Ok(())
}
