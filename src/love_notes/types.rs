//! Love note data structures.

use crate::board::BoardEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Starters offered when the compose box is empty.
pub const LOVE_PROMPTS: [&str; 8] = [
    "You make my heart skip a beat when...",
    "I love how you...",
    "You're amazing because...",
    "My favorite thing about you is...",
    "You make me smile when...",
    "I'm grateful for you because...",
    "You're special to me because...",
    "I admire how you...",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoveNote {
    pub id: String,
    pub text: String,
    /// Display name of the writer.
    pub author: String,
    pub author_avatar: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub hearts: u32,
    #[serde(default)]
    pub loved: bool,
}

impl BoardEntry for LoveNote {
    fn id(&self) -> &str {
        &self.id
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
