//! Board post model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A post on a group's board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardPost {
    pub id: String,
    pub group_id: String,
    pub title: String,
    pub content: String,
    pub author_name: String,
    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub comment_count: u32,
}
