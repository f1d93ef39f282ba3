//! Prayer request model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A prayer request posted in a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerRequest {
    pub id: String,
    pub group_id: String,
    pub author_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
