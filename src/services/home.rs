//! Home screen composition rules.
//!
//! Pure helpers deciding what the home screen surfaces: which sections
//! render and in what order, which notice occupies the banner, and which
//! fellowship notification deserves an alert.

use crate::models::{FellowshipAlert, Notice, Notification, Section};
use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeSet;

/// How long a fellowship notification stays eligible for the home alert.
const FELLOWSHIP_ALERT_WINDOW_HOURS: i64 = 6;

/// Sections to render: enabled ones, in stored order.
pub fn visible_sections(sections: &[Section]) -> Vec<Section> {
    sections.iter().filter(|s| s.enabled).cloned().collect()
}

/// The single most recent notice the user has not dismissed.
///
/// `notices` arrives newest-first from the API, so the first non-dismissed
/// entry is the one to show.
pub fn latest_visible_notice<'a>(
    notices: &'a [Notice],
    dismissed: &BTreeSet<String>,
) -> Option<&'a Notice> {
    notices.iter().find(|notice| !dismissed.contains(&notice.id))
}

/// The most recent unread fellowship notification for the active group.
///
/// Eligible notifications carry a fellowship id, belong to `group_id`, are
/// unread, and are younger than the alert window. The notification list is
/// assumed newest-first.
pub fn recent_fellowship_alert(
    notifications: &[Notification],
    group_id: &str,
    now: DateTime<Utc>,
) -> Option<FellowshipAlert> {
    let cutoff = now - Duration::hours(FELLOWSHIP_ALERT_WINDOW_HOURS);

    notifications
        .iter()
        .filter(|n| n.metadata.group_id.as_deref() == Some(group_id))
        .find(|n| n.metadata.fellowship_id.is_some() && n.is_unread() && n.timestamp > cutoff)
        .map(|n| FellowshipAlert {
            id: n.id.clone(),
            screen: n.screen.clone(),
        })
}
