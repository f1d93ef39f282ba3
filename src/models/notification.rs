//! Notification model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Routing metadata attached to a notification by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationMetadata {
    /// Group the notification belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    /// Fellowship the notification refers to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fellowship_id: Option<String>,
}

/// A notification record owned by the Manna API.
///
/// The local side holds these only as the latest fetch result; they are
/// never stored durably on the device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub body: String,

    #[serde(default)]
    pub metadata: NotificationMetadata,

    pub is_read: bool,
    pub timestamp: DateTime<Utc>,

    /// In-app route to open when the notification is tapped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen: Option<String>,
}

impl Notification {
    pub fn is_unread(&self) -> bool {
        !self.is_read
    }
}

/// A fellowship notification surfaced as a home screen banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FellowshipAlert {
    /// Id of the underlying notification, used to mark it read on dismissal.
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let json = r#"{
            "id": "n1",
            "title": "New fellowship",
            "body": "Tap to join",
            "metadata": {"groupId": "g1", "fellowshipId": "f1"},
            "isRead": false,
            "timestamp": "2025-11-02T09:30:00Z",
            "screen": "/fellowship/f1"
        }"#;
        let n: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(n.metadata.group_id.as_deref(), Some("g1"));
        assert_eq!(n.metadata.fellowship_id.as_deref(), Some("f1"));
        assert!(n.is_unread());
    }

    #[test]
    fn test_metadata_defaults_when_absent() {
        let json = r#"{
            "id": "n2",
            "title": "Welcome",
            "body": "Hello",
            "isRead": true,
            "timestamp": "2025-11-02T09:30:00Z"
        }"#;
        let n: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(n.metadata, NotificationMetadata::default());
        assert!(!n.is_unread());
    }
}
