//! Home screen overview command.

use crate::error::AppError;
use crate::models::{FellowshipAlert, Notice, Section};
use crate::services::home;
use serde::Serialize;
use tauri::{AppHandle, State};

use super::notifications::SharedNotificationCenter;
use super::sections::preference_store;

/// Everything the home screen needs on focus, composed in one call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeOverview {
    /// Enabled sections in the user's stored order.
    pub sections: Vec<Section>,

    /// Most recent non-dismissed notice, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,

    /// Recent unread fellowship notification for the active group, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fellowship_alert: Option<FellowshipAlert>,
}

/// Compose the home screen overview.
///
/// Invoked on every focus transition of the home screen: preferences are
/// reloaded from disk so edits made on the settings screen while this
/// screen was backgrounded are picked up immediately.
///
/// The notice banner and the fellowship alert degrade independently when
/// their fetches fail; the section list always renders.
#[tauri::command]
pub async fn get_home_overview(
    app: AppHandle,
    center: State<'_, SharedNotificationCenter>,
    group_id: String,
) -> Result<HomeOverview, AppError> {
    let prefs = preference_store(&app)?.load();
    let client = super::session_client()?;

    let (notices, notifications) =
        futures::join!(client.get_main_notices(), center.refresh(&client));

    let notice = match notices {
        Ok(list) => home::latest_visible_notice(&list, &prefs.dismissed_notice_ids).cloned(),
        Err(e) => {
            log::warn!("[home] Failed to fetch notices: {}", e);
            None
        }
    };

    let fellowship_alert = match notifications {
        Ok(list) => home::recent_fellowship_alert(&list, &group_id, chrono::Utc::now()),
        Err(e) => {
            log::warn!("[home] Failed to refresh notifications: {}", e);
            None
        }
    };

    Ok(HomeOverview {
        sections: home::visible_sections(&prefs.sections),
        notice,
        fellowship_alert,
    })
}
