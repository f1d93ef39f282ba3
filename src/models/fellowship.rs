//! Fellowship (group sharing) model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fellowship entry in a group's feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fellowship {
    pub id: String,
    pub group_id: String,
    pub title: String,

    /// First lines of the fellowship content, for card previews.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,

    pub created_at: DateTime<Utc>,
}
