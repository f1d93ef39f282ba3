//! Admin notice model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An admin-authored banner message shown on the home screen until the
/// user dismisses it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub id: String,
    pub title: String,

    /// Short text rendered in the home banner.
    pub main_display_text: String,

    pub created_at: DateTime<Utc>,
}
