//! Feed commands for the home screen sections.
//!
//! Each section fetches independently so one failing feed does not block
//! the others.

use crate::error::AppError;
use crate::models::{BoardPost, Fellowship, PrayerRequest};
use crate::services::api_client::{FeedQuery, Page};

/// Recent fellowships for a group.
#[tauri::command]
pub async fn get_recent_fellowships(
    group_id: String,
    limit: Option<u32>,
    cursor: Option<String>,
) -> Result<Page<Fellowship>, AppError> {
    let client = super::session_client()?;
    client
        .list_fellowships(&FeedQuery {
            group_id,
            limit,
            cursor,
        })
        .await
}

/// Recent prayer requests for a group.
#[tauri::command]
pub async fn get_recent_prayer_requests(
    group_id: String,
    limit: Option<u32>,
    cursor: Option<String>,
) -> Result<Page<PrayerRequest>, AppError> {
    let client = super::session_client()?;
    client
        .list_prayer_requests(&FeedQuery {
            group_id,
            limit,
            cursor,
        })
        .await
}

/// Recent board posts for a group.
#[tauri::command]
pub async fn get_recent_board_posts(
    group_id: String,
    limit: Option<u32>,
    cursor: Option<String>,
) -> Result<Page<BoardPost>, AppError> {
    let client = super::session_client()?;
    client
        .list_board_posts(&FeedQuery {
            group_id,
            limit,
            cursor,
        })
        .await
}
