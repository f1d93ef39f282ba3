//! Tauri IPC command handlers.
//!
//! This module contains all commands exposed to the frontend via Tauri's invoke system.
//! Commands are organized by functionality:
//! - `auth`: sign-in/sign-out and session management
//! - `home`: home screen overview composition
//! - `sections`: home section order and visibility
//! - `notices`: admin notices and dismissal
//! - `notifications`: notification list, read state, and badge
//! - `feeds`: recent fellowships, prayer requests, and board posts
//! - `push`: notification permission and push-token registration

pub mod auth;
pub mod feeds;
pub mod home;
pub mod notices;
pub mod notifications;
pub mod push;
pub mod sections;

pub use auth::{get_current_user, get_my_groups, get_session_status, sign_in, sign_out};
pub use feeds::{get_recent_board_posts, get_recent_fellowships, get_recent_prayer_requests};
pub use home::get_home_overview;
pub use notices::{dismiss_notice, get_main_notices};
pub use notifications::{
    delete_notification, get_notifications, get_unread_count, mark_all_notifications_as_read,
    mark_notification_as_read, refresh_notifications, send_native_notification,
};
pub use push::{get_notification_permission, register_push_token, request_notification_permission};
pub use sections::{get_home_sections, save_home_sections};

use crate::error::AppError;
use crate::services::api_client::{MannaClient, MannaClientConfig};
use crate::services::CredentialService;

/// Base URL of the hosted Manna API.
pub const API_BASE_URL: &str = "https://api.manna.app";

/// Build an API client for the stored session.
///
/// # Errors
/// Not-found error when the user has never signed in.
pub(crate) fn session_client() -> Result<MannaClient, AppError> {
    let token = CredentialService::get_session_token()?;

    MannaClient::new(MannaClientConfig {
        base_url: API_BASE_URL.to_string(),
        token,
        timeout_secs: 30,
    })
}
