//! Shared boards: lists both users add to, kept newest first under one key.
//!
//! Love notes, the diary, date ideas and the playlist all follow the same
//! shape. Entries are loaded once, every change is written back straight
//! away, and creating an entry tells the partner through the bus.

use crate::notifications::{GardenNotification, NotificationBus, NotificationKind};
use crate::profile::UserProfile;
use crate::store::{load_json, save_json_logged, KeyValueStore};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// An item on a board.
pub trait BoardEntry: Clone + Serialize + DeserializeOwned {
    fn id(&self) -> &str;
    fn timestamp(&self) -> DateTime<Utc>;
}

/// Saved entries at `key`, newest first. `None` when the key was never
/// written; a malformed value loads as an empty board.
pub fn load_board<T: BoardEntry>(store: &dyn KeyValueStore, key: &str) -> Option<Vec<T>> {
    store.get(key)?;
    let mut entries: Vec<T> = load_json(store, key).unwrap_or_default();
    entries.sort_by_key(|e| std::cmp::Reverse(e.timestamp()));
    Some(entries)
}

pub fn save_board<T: BoardEntry>(store: &dyn KeyValueStore, key: &str, entries: &[T]) {
    save_json_logged(store, key, &entries);
}

/// Flip a heart reaction, keeping the counter in step.
pub fn toggle_heart(loved: &mut bool, hearts: &mut u32) {
    *hearts = if *loved {
        hearts.saturating_sub(1)
    } else {
        hearts.saturating_add(1)
    };
    *loved = !*loved;
}

pub struct Board<T> {
    store: Arc<dyn KeyValueStore>,
    bus: NotificationBus,
    author: UserProfile,
    key: &'static str,
    entries: Vec<T>,
}

impl<T: BoardEntry> Board<T> {
    /// Open the board at `key`, starting empty if nothing was saved.
    pub fn open(
        store: Arc<dyn KeyValueStore>,
        bus: NotificationBus,
        author: UserProfile,
        key: &'static str,
    ) -> Self {
        Self::open_or_seed(store, bus, author, key, Vec::new)
    }

    /// Like [`Board::open`], but a board that was never saved starts with
    /// `seed()`. Seeds stay unsaved until the first change.
    pub fn open_or_seed(
        store: Arc<dyn KeyValueStore>,
        bus: NotificationBus,
        author: UserProfile,
        key: &'static str,
        seed: impl FnOnce() -> Vec<T>,
    ) -> Self {
        let entries = load_board(store.as_ref(), key).unwrap_or_else(seed);
        log::debug!("Loaded {} entries from '{}'", entries.len(), key);
        Self {
            store,
            bus,
            author,
            key,
            entries,
        }
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn author(&self) -> &UserProfile {
        &self.author
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// Put a new entry on top and save.
    pub fn add(&mut self, entry: T) -> &T {
        self.entries.insert(0, entry);
        self.save();
        &self.entries[0]
    }

    /// Apply `change` to the entry with `id` and save. False if no such entry.
    pub fn modify(&mut self, id: &str, change: impl FnOnce(&mut T)) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id() == id) else {
            log::debug!("No entry {} on '{}'", id, self.key);
            return false;
        };
        change(entry);
        self.save();
        true
    }

    /// Tell the partner about something the author did here.
    pub fn notify(&self, kind: NotificationKind, title: &str, message: impl Into<String>) -> bool {
        let note = GardenNotification::new(kind, title, message, self.author.name.clone());
        self.bus.notify_partner(self.store.as_ref(), &self.author, note)
    }

    fn save(&self) {
        save_board(self.store.as_ref(), self.key, &self.entries);
    }
}
