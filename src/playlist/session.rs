//! The playlist bound to a store, a bus and the signed-in user.

use super::logic::{add_song, loved_count, toggle_love};
use super::types::{Song, SongDraft};
use crate::board::Board;
use crate::core::constants::PLAYLIST_KEY;
use crate::notifications::{NotificationBus, NotificationKind};
use crate::profile::UserProfile;
use crate::store::KeyValueStore;
use chrono::{DateTime, Utc};
use std::io;
use std::sync::Arc;

pub struct Playlist {
    board: Board<Song>,
}

impl Playlist {
    pub fn new(store: Arc<dyn KeyValueStore>, bus: NotificationBus, user: UserProfile) -> Self {
        Self {
            board: Board::open(store, bus, user, PLAYLIST_KEY),
        }
    }

    pub fn songs(&self) -> &[Song] {
        self.board.entries()
    }

    pub fn loved_count(&self) -> usize {
        loved_count(self.board.entries())
    }

    pub fn add(&mut self, draft: &SongDraft, now: DateTime<Utc>) -> io::Result<&Song> {
        let song = add_song(draft, self.board.author(), now)?;
        self.board.notify(
            NotificationKind::Music,
            "New Song Added",
            format!("{} added \"{}\" by {} to Us", song.added_by, song.title, song.artist),
        );
        Ok(self.board.add(song))
    }

    pub fn toggle_love(&mut self, id: &str) -> bool {
        self.board.modify(id, toggle_love)
    }
}
