//! Business logic services.
//!
//! This module contains the core logic for talking to the Manna API,
//! reconciling notification state with the OS badge, and managing local
//! home screen preferences.
//!
//! Services are designed to be testable and independent of Tauri-specific code.

pub mod api_client;
pub mod credentials;
pub mod home;
pub mod notification_center;
pub mod preferences;

pub use api_client::MannaClient;
pub use credentials::CredentialService;
pub use notification_center::NotificationCenter;
pub use preferences::PreferenceStore;
