//! Authentication commands for the Manna API session.
//!
//! Sign-in validates credentials against the API and stores the returned
//! session token in the OS keychain; every other command builds its client
//! from that stored token.

use crate::error::AppError;
use crate::models::{Group, User};
use crate::services::api_client::{MannaClient, MannaClientConfig, SignInRequest};
use crate::services::CredentialService;
use serde::{Deserialize, Serialize};

/// Input for the sign_in command.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Current session state for the frontend's routing decisions.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    /// Whether a session token is stored on this device.
    pub signed_in: bool,
}

/// Sign in with email and password.
///
/// This command:
/// 1. Validates the credentials against the API
/// 2. Stores the session token securely in the OS keychain
/// 3. Returns the authenticated user
///
/// # Errors
/// - Authentication error if the credentials are rejected
/// - Credential storage error if keychain access fails
#[tauri::command]
pub async fn sign_in(input: SignInInput) -> Result<User, AppError> {
    if input.email.trim().is_empty() {
        return Err(AppError::invalid_input_field("Email is required", "email"));
    }

    // Pre-auth client: no token yet
    let client = MannaClient::new(MannaClientConfig {
        base_url: super::API_BASE_URL.to_string(),
        token: String::new(),
        timeout_secs: 30,
    })?;

    let session = client
        .sign_in(&SignInRequest {
            email: input.email,
            password: input.password,
        })
        .await?;

    CredentialService::store_session_token(&session.token)?;

    Ok(session.user)
}

/// Fetch the authenticated user for the stored session.
///
/// Used on app start to decide between the home and onboarding flows.
///
/// # Errors
/// Authentication error when the session has expired or been revoked.
#[tauri::command]
pub async fn get_current_user() -> Result<User, AppError> {
    let client = super::session_client()?;
    client.validate_session().await
}

/// Get the groups the signed-in user belongs to.
///
/// Drives the group switcher; the active group id is threaded back into
/// the home and feed commands.
#[tauri::command]
pub async fn get_my_groups() -> Result<Vec<Group>, AppError> {
    let client = super::session_client()?;
    client.get_my_groups().await
}

/// Sign out, deleting the stored session token.
///
/// Idempotent: signing out without a session is not an error.
#[tauri::command]
pub async fn sign_out() -> Result<(), AppError> {
    CredentialService::delete_session_token()
}

/// Check whether a session token is stored on this device.
#[tauri::command]
pub async fn get_session_status() -> Result<SessionStatus, AppError> {
    Ok(SessionStatus {
        signed_in: CredentialService::has_session_token()?,
    })
}
