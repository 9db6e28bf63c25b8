//! Love notes bound to a store, a bus and the signed-in user.

use super::logic::{compose_note, note_preview, toggle_love};
use super::types::LoveNote;
use crate::board::Board;
use crate::core::constants::LOVE_NOTES_KEY;
use crate::notifications::{NotificationBus, NotificationKind};
use crate::profile::UserProfile;
use crate::store::KeyValueStore;
use chrono::{DateTime, Utc};
use std::io;
use std::sync::Arc;

pub struct LoveNotesBoard {
    board: Board<LoveNote>,
}

impl LoveNotesBoard {
    pub fn new(store: Arc<dyn KeyValueStore>, bus: NotificationBus, user: UserProfile) -> Self {
        Self {
            board: Board::open(store, bus, user, LOVE_NOTES_KEY),
        }
    }

    /// Newest first.
    pub fn notes(&self) -> &[LoveNote] {
        self.board.entries()
    }

    /// Post a note and let the partner know.
    pub fn send(&mut self, text: &str, now: DateTime<Utc>) -> io::Result<&LoveNote> {
        let note = compose_note(text, self.board.author(), now)?;
        self.board.notify(
            NotificationKind::Affirmation,
            "New Love Note",
            format!(
                "{} sent you a sweet message: \"{}\"",
                note.author,
                note_preview(&note.text)
            ),
        );
        log::info!("{} left a love note", note.author);
        Ok(self.board.add(note))
    }

    pub fn toggle_love(&mut self, id: &str) -> bool {
        self.board.modify(id, toggle_love)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::save_profile;
    use crate::store::MemoryStore;

    fn board_for(store: Arc<dyn KeyValueStore>, bus: NotificationBus) -> LoveNotesBoard {
        LoveNotesBoard::new(store, bus, UserProfile::placeholder("Keychain"))
    }

    #[test]
    fn test_send_saves_and_tells_partner() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        save_profile(store.as_ref(), &UserProfile::placeholder("Bug")).unwrap();
        let bus = NotificationBus::new();
        let mut rx = bus.subscribe();
        let mut notes = board_for(store.clone(), bus);

        let long = format!("I love how you {}", "hum ".repeat(20));
        notes.send(&long, Utc::now()).unwrap();
        assert!(store.get(LOVE_NOTES_KEY).is_some());

        let note = rx.try_recv().unwrap();
        assert_eq!(note.kind, NotificationKind::Affirmation);
        assert_eq!(note.title, "New Love Note");
        assert_eq!(
            note.message,
            format!(
                "Keychain sent you a sweet message: \"{}\"",
                note_preview(long.trim())
            )
        );
        assert!(note.message.ends_with("...\""));
    }

    #[test]
    fn test_blank_note_changes_nothing() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        save_profile(store.as_ref(), &UserProfile::placeholder("Bug")).unwrap();
        let bus = NotificationBus::new();
        let mut rx = bus.subscribe();
        let mut notes = board_for(store.clone(), bus);

        assert!(notes.send(" \t ", Utc::now()).is_err());
        assert!(notes.notes().is_empty());
        assert!(store.get(LOVE_NOTES_KEY).is_none());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_hearts_survive_reload() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut notes = board_for(store.clone(), NotificationBus::new());
        let id = notes.send("first", Utc::now()).unwrap().id.clone();
        notes.send("second", Utc::now()).unwrap();
        assert!(notes.toggle_love(&id));

        let reloaded = board_for(store, NotificationBus::new());
        assert_eq!(reloaded.notes().len(), 2);
        assert_eq!(reloaded.notes()[0].text, "second");
        assert_eq!(reloaded.notes()[1].hearts, 1);
        assert!(reloaded.notes()[1].loved);
    }
}
