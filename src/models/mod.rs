//! Data models for the application.
//!
//! These models represent the core entities exchanged with the Manna API
//! and used for IPC communication with the frontend.
//!
//! All wire models use camelCase field names to match the API and frontend.

pub mod board_post;
pub mod fellowship;
pub mod group;
pub mod notice;
pub mod notification;
pub mod prayer_request;
pub mod section;
pub mod user;

// Re-exports for convenient access
pub use board_post::BoardPost;
pub use fellowship::Fellowship;
pub use group::Group;
pub use notice::Notice;
pub use notification::{FellowshipAlert, Notification, NotificationMetadata};
pub use prayer_request::PrayerRequest;
pub use section::{default_sections, Section, SectionKey};
pub use user::{AuthType, Session, User};
