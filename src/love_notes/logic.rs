//! Pure love note rules.

use super::types::LoveNote;
use crate::board::toggle_heart;
use crate::core::constants::{MAX_LOVE_NOTE_CHARS, NOTE_PREVIEW_CHARS};
use crate::profile::UserProfile;
use chrono::{DateTime, Utc};
use std::io;
use uuid::Uuid;

/// Build a note from raw compose-box text.
///
/// Surrounding whitespace is dropped. Blank notes and notes longer than
/// 500 characters are rejected with `InvalidInput`.
pub fn compose_note(text: &str, author: &UserProfile, now: DateTime<Utc>) -> io::Result<LoveNote> {
    let text = text.trim();
    if text.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "A love note needs some words",
        ));
    }
    if text.chars().count() > MAX_LOVE_NOTE_CHARS {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Love notes are limited to {} characters", MAX_LOVE_NOTE_CHARS),
        ));
    }

    Ok(LoveNote {
        id: Uuid::new_v4().to_string(),
        text: text.to_string(),
        author: author.name.clone(),
        author_avatar: author.avatar.clone(),
        timestamp: now,
        hearts: 0,
        loved: false,
    })
}

/// First 50 characters, with an ellipsis when cut.
pub fn note_preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(NOTE_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

pub fn toggle_love(note: &mut LoveNote) {
    toggle_heart(&mut note.loved, &mut note.hearts);
}
