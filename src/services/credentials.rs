//! Credential storage service using the OS keychain.
//!
//! This module stores the Manna API session token in the system's native
//! credential storage (Keychain on macOS/iOS, Keystore on Android,
//! Credential Manager on Windows, Secret Service on Linux).

use crate::error::AppError;
use keyring::Entry;

/// Service name used in the keychain.
const SERVICE_NAME: &str = "manna";

/// Account identifier for the API session token.
const SESSION_ACCOUNT: &str = "api-session";

/// Credential storage operations.
pub struct CredentialService;

impl CredentialService {
    /// Store the session token returned by sign-in.
    pub fn store_session_token(token: &str) -> Result<(), AppError> {
        let entry = Self::session_entry()?;

        entry
            .set_password(token)
            .map_err(|e| AppError::credential_storage(format!("Failed to store token: {}", e)))
    }

    /// Retrieve the stored session token.
    ///
    /// # Returns
    /// The stored token, or a not-found error if the user never signed in.
    pub fn get_session_token() -> Result<String, AppError> {
        let entry = Self::session_entry()?;

        entry.get_password().map_err(|e| match e {
            keyring::Error::NoEntry => AppError::not_found("session token"),
            _ => AppError::credential_storage(format!("Failed to retrieve token: {}", e)),
        })
    }

    /// Delete the stored session token.
    ///
    /// This operation is idempotent - deleting a non-existent token is not an error.
    pub fn delete_session_token() -> Result<(), AppError> {
        let entry = Self::session_entry()?;

        match entry.delete_credential() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Ok(()), // Idempotent: already deleted
            Err(e) => Err(AppError::credential_storage(format!(
                "Failed to delete token: {}",
                e
            ))),
        }
    }

    /// Check whether a session token is stored.
    pub fn has_session_token() -> Result<bool, AppError> {
        let entry = Self::session_entry()?;

        match entry.get_password() {
            Ok(_) => Ok(true),
            Err(keyring::Error::NoEntry) => Ok(false),
            Err(e) => Err(AppError::credential_storage(format!(
                "Failed to check token: {}",
                e
            ))),
        }
    }

    /// Create the keyring entry holding the session token.
    fn session_entry() -> Result<Entry, AppError> {
        Entry::new(SERVICE_NAME, SESSION_ACCOUNT).map_err(|e| {
            AppError::credential_storage(format!("Failed to create keyring entry: {}", e))
        })
    }
}

// Note: Integration tests for actual keychain operations would require
// a test keychain or mocking. These are best done as manual tests or
// in a CI environment with proper keychain access.
