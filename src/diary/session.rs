//! The diary bound to a store, a bus and the signed-in user.

use super::logic::{filter_entries, toggle_love, total_hearts, write_entry};
use super::types::{DiaryDraft, DiaryEntry, DiaryView};
use crate::board::Board;
use crate::core::constants::DIARY_KEY;
use crate::notifications::{NotificationBus, NotificationKind};
use crate::profile::UserProfile;
use crate::store::KeyValueStore;
use chrono::{DateTime, Utc};
use std::io;
use std::sync::Arc;

pub struct DiaryBook {
    board: Board<DiaryEntry>,
}

impl DiaryBook {
    pub fn new(store: Arc<dyn KeyValueStore>, bus: NotificationBus, user: UserProfile) -> Self {
        Self {
            board: Board::open(store, bus, user, DIARY_KEY),
        }
    }

    pub fn entries(&self) -> &[DiaryEntry] {
        self.board.entries()
    }

    pub fn visible(&self, view: DiaryView) -> Vec<&DiaryEntry> {
        filter_entries(self.board.entries(), view, &self.board.author().name)
    }

    pub fn total_hearts(&self) -> u32 {
        total_hearts(self.board.entries())
    }

    pub fn write(&mut self, draft: &DiaryDraft, now: DateTime<Utc>) -> io::Result<&DiaryEntry> {
        let entry = write_entry(draft, self.board.author(), now)?;
        self.board.notify(
            NotificationKind::Diary,
            "New Diary Entry",
            format!("{} wrote a new diary entry: \"{}\"", entry.author, entry.title),
        );
        Ok(self.board.add(entry))
    }

    pub fn toggle_love(&mut self, id: &str) -> bool {
        self.board.modify(id, toggle_love)
    }
}
