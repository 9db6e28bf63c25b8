//! Pure diary rules.

use super::types::{DiaryDraft, DiaryEntry, DiaryView};
use crate::board::toggle_heart;
use crate::profile::UserProfile;
use chrono::{DateTime, Utc};
use std::io;
use uuid::Uuid;

/// Split a comma separated tag line, dropping blanks.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build an entry from a draft. Title and content are both required.
pub fn write_entry(
    draft: &DiaryDraft,
    author: &UserProfile,
    now: DateTime<Utc>,
) -> io::Result<DiaryEntry> {
    let title = draft.title.trim();
    let content = draft.content.trim();
    if title.is_empty() || content.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "A diary entry needs a title and some words",
        ));
    }

    let location = draft.location.trim();
    Ok(DiaryEntry {
        id: Uuid::new_v4().to_string(),
        title: title.to_string(),
        content: content.to_string(),
        author: author.name.clone(),
        author_avatar: author.avatar.clone(),
        timestamp: now,
        photos: Vec::new(),
        location: (!location.is_empty()).then(|| location.to_string()),
        mood: draft.mood,
        tags: parse_tags(&draft.tags),
        hearts: 0,
        loved: false,
    })
}

/// Entries visible in `view`, matched on the viewer's display name.
pub fn filter_entries<'a>(
    entries: &'a [DiaryEntry],
    view: DiaryView,
    viewer: &str,
) -> Vec<&'a DiaryEntry> {
    entries
        .iter()
        .filter(|e| match view {
            DiaryView::All => true,
            DiaryView::Mine => e.author == viewer,
            DiaryView::Theirs => e.author != viewer,
        })
        .collect()
}

pub fn total_hearts(entries: &[DiaryEntry]) -> u32 {
    entries.iter().fold(0, |sum, e| sum.saturating_add(e.hearts))
}

pub fn toggle_love(entry: &mut DiaryEntry) {
    toggle_heart(&mut entry.loved, &mut entry.hearts);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diary::types::DiaryMood;

    fn draft(title: &str, content: &str) -> DiaryDraft {
        DiaryDraft {
            title: title.to_string(),
            content: content.to_string(),
            ..DiaryDraft::default()
        }
    }

    #[test]
    fn test_tags_are_trimmed_and_blanks_dropped() {
        assert_eq!(parse_tags(" beach, sunset ,, ,us"), ["beach", "sunset", "us"]);
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ").is_empty());
    }

    #[test]
    fn test_entry_needs_title_and_content() {
        let ben = UserProfile::placeholder("Bug");
        assert!(write_entry(&draft("", "body"), &ben, Utc::now()).is_err());
        assert!(write_entry(&draft("Title", "   "), &ben, Utc::now()).is_err());

        let mut full = draft(" Picnic ", " Sun and strawberries ");
        full.location = "   ".to_string();
        full.mood = DiaryMood::Grateful;
        full.tags = "summer, food".to_string();
        let entry = write_entry(&full, &ben, Utc::now()).unwrap();
        assert_eq!(entry.title, "Picnic");
        assert_eq!(entry.content, "Sun and strawberries");
        assert_eq!(entry.location, None);
        assert_eq!(entry.mood, DiaryMood::Grateful);
        assert_eq!(entry.tags, ["summer", "food"]);
        assert_eq!(entry.author_avatar, "🐨");
    }

    #[test]
    fn test_view_filters_by_author_name() {
        let ava = UserProfile {
            name: "Ava".to_string(),
            ..UserProfile::placeholder("Keychain")
        };
        let ben = UserProfile {
            name: "Ben".to_string(),
            ..UserProfile::placeholder("Bug")
        };
        let entries = vec![
            write_entry(&draft("a", "x"), &ava, Utc::now()).unwrap(),
            write_entry(&draft("b", "x"), &ben, Utc::now()).unwrap(),
            write_entry(&draft("c", "x"), &ava, Utc::now()).unwrap(),
        ];

        assert_eq!(filter_entries(&entries, DiaryView::All, "Ava").len(), 3);
        let mine: Vec<&str> = filter_entries(&entries, DiaryView::Mine, "Ava")
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(mine, ["a", "c"]);
        assert_eq!(filter_entries(&entries, DiaryView::Theirs, "Ava")[0].title, "b");
    }

    #[test]
    fn test_total_hearts() {
        let ava = UserProfile::placeholder("Keychain");
        let mut entries = vec![
            write_entry(&draft("a", "x"), &ava, Utc::now()).unwrap(),
            write_entry(&draft("b", "x"), &ava, Utc::now()).unwrap(),
        ];
        toggle_love(&mut entries[0]);
        entries[1].hearts = 4;
        assert_eq!(total_hearts(&entries), 5);
    }

    #[test]
    fn test_old_entries_without_optional_fields_load() {
        let raw = r#"{"id":"1","title":"t","content":"c","author":"Ava",
            "authorAvatar":"🐰","timestamp":"2024-02-14T09:00:00Z","mood":"nostalgic"}"#;
        let entry: DiaryEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(entry.mood, DiaryMood::Nostalgic);
        assert!(entry.tags.is_empty());
        assert_eq!(entry.location, None);
    }
}
