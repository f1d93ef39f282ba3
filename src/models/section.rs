//! Home screen section model.

use serde::{Deserialize, Serialize};

/// Kind of content a home section displays.
///
/// The set of keys is fixed at build time; the stored section list is
/// reconciled against it on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKey {
    Fellowship,
    PrayerRequest,
    Board,
}

impl SectionKey {
    /// Every known section key, in default display order.
    pub const ALL: [SectionKey; 3] = [
        SectionKey::Fellowship,
        SectionKey::PrayerRequest,
        SectionKey::Board,
    ];
}

impl std::fmt::Display for SectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fellowship => write!(f, "fellowship"),
            Self::PrayerRequest => write!(f, "prayerRequest"),
            Self::Board => write!(f, "board"),
        }
    }
}

/// A named, user-orderable, toggleable block of home screen content.
///
/// Array order is display order. Exactly one section exists per key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub title: String,
    pub key: SectionKey,
    pub enabled: bool,
}

/// The built-in section list used until the user customizes the order.
pub fn default_sections() -> Vec<Section> {
    vec![
        Section {
            id: "1".to_string(),
            title: "Recent fellowship".to_string(),
            key: SectionKey::Fellowship,
            enabled: true,
        },
        Section {
            id: "2".to_string(),
            title: "Prayer requests".to_string(),
            key: SectionKey::PrayerRequest,
            enabled: true,
        },
        Section {
            id: "3".to_string(),
            title: "Recent board posts".to_string(),
            key: SectionKey::Board,
            enabled: true,
        },
    ]
}
