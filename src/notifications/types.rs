//! Notification payloads shared between panels.

use serde::{Deserialize, Serialize};

/// Which panel a notification came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Affirmation,
    Diary,
    Date,
    Heart,
    Koala,
    Music,
}

impl NotificationKind {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Affirmation => "💌",
            NotificationKind::Diary => "📖",
            NotificationKind::Date => "💡",
            NotificationKind::Heart => "💖",
            NotificationKind::Koala => "🐨",
            NotificationKind::Music => "🎵",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            NotificationKind::Affirmation => "Love Note",
            NotificationKind::Diary => "Diary",
            NotificationKind::Date => "Date Idea",
            NotificationKind::Heart => "Heart Hunt",
            NotificationKind::Koala => "Koala Garden",
            NotificationKind::Music => "Playlist",
        }
    }
}

/// A milestone announcement for the other user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GardenNotification {
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Display name of the user who caused it.
    pub from: String,
}

impl GardenNotification {
    pub fn new(
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        from: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            from: from.into(),
        }
    }
}
