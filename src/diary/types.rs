//! Diary data structures.

use crate::board::BoardEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DIARY_PROMPTS: [&str; 8] = [
    "What made you smile today?",
    "Describe a perfect moment you shared together...",
    "What are you grateful for right now?",
    "Write about a memory that makes your heart flutter...",
    "What's something small that brought you joy today?",
    "Describe the way they make you feel...",
    "What's a dream you have for your future together?",
    "Write about a place that's special to both of you...",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiaryMood {
    #[default]
    Happy,
    Love,
    Excited,
    Peaceful,
    Grateful,
    Nostalgic,
}

impl DiaryMood {
    pub const ALL: [DiaryMood; 6] = [
        DiaryMood::Happy,
        DiaryMood::Love,
        DiaryMood::Excited,
        DiaryMood::Peaceful,
        DiaryMood::Grateful,
        DiaryMood::Nostalgic,
    ];

    pub fn emoji(&self) -> &'static str {
        match self {
            DiaryMood::Happy => "😊",
            DiaryMood::Love => "💕",
            DiaryMood::Excited => "🎉",
            DiaryMood::Peaceful => "😌",
            DiaryMood::Grateful => "🙏",
            DiaryMood::Nostalgic => "🌅",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DiaryMood::Happy => "Happy",
            DiaryMood::Love => "In Love",
            DiaryMood::Excited => "Excited",
            DiaryMood::Peaceful => "Peaceful",
            DiaryMood::Grateful => "Grateful",
            DiaryMood::Nostalgic => "Nostalgic",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub author_avatar: String,
    pub timestamp: DateTime<Utc>,
    /// Attached picture references. The terminal never adds any but keeps
    /// whatever was saved.
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub mood: DiaryMood,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub hearts: u32,
    #[serde(default)]
    pub loved: bool,
}

impl BoardEntry for DiaryEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// What the user typed into the compose form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiaryDraft {
    pub title: String,
    pub content: String,
    pub location: String,
    pub mood: DiaryMood,
    /// Comma separated.
    pub tags: String,
}

/// Whose entries the diary shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiaryView {
    #[default]
    All,
    Mine,
    Theirs,
}

impl DiaryView {
    pub fn label(&self) -> &'static str {
        match self {
            DiaryView::All => "All Entries",
            DiaryView::Mine => "My Entries",
            DiaryView::Theirs => "Their Entries",
        }
    }

    pub fn next(&self) -> DiaryView {
        match self {
            DiaryView::All => DiaryView::Mine,
            DiaryView::Mine => DiaryView::Theirs,
            DiaryView::Theirs => DiaryView::All,
        }
    }
}
