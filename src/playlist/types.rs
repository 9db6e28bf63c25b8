//! Playlist data structures.

use crate::board::BoardEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SongMood {
    Happy,
    #[default]
    Romantic,
    Chill,
    Energetic,
    Nostalgic,
}

impl SongMood {
    pub const ALL: [SongMood; 5] = [
        SongMood::Happy,
        SongMood::Romantic,
        SongMood::Chill,
        SongMood::Energetic,
        SongMood::Nostalgic,
    ];

    pub fn emoji(&self) -> &'static str {
        match self {
            SongMood::Happy => "😊",
            SongMood::Romantic => "💕",
            SongMood::Chill => "😌",
            SongMood::Energetic => "⚡",
            SongMood::Nostalgic => "🌅",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SongMood::Happy => "Happy",
            SongMood::Romantic => "Romantic",
            SongMood::Chill => "Chill",
            SongMood::Energetic => "Energetic",
            SongMood::Nostalgic => "Nostalgic",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub added_by: String,
    pub added_by_avatar: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub loved: bool,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub mood: SongMood,
}

impl BoardEntry for Song {
    fn id(&self) -> &str {
        &self.id
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SongDraft {
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub mood: SongMood,
}
