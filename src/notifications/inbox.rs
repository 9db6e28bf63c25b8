//! Persistent notification inbox (newest first, capped).

use super::types::{GardenNotification, NotificationKind};
use crate::core::constants::{MAX_INBOX_ENTRIES, NOTIFICATIONS_KEY};
use crate::store::{load_json_or_default, save_json_logged, KeyValueStore};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::broadcast::{self, error::TryRecvError};

/// A received notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboxEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub from: String,
    pub read: bool,
}

pub struct NotificationInbox {
    store: Arc<dyn KeyValueStore>,
    entries: Vec<InboxEntry>,
}

impl NotificationInbox {
    /// Load the inbox, starting empty if nothing usable is stored.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let mut entries: Vec<InboxEntry> = load_json_or_default(store.as_ref(), NOTIFICATIONS_KEY);
        entries.truncate(MAX_INBOX_ENTRIES);
        Self { store, entries }
    }

    pub fn entries(&self) -> &[InboxEntry] {
        &self.entries
    }

    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.read).count()
    }

    /// Stamp and file a notification at the top of the inbox.
    pub fn receive(&mut self, notification: GardenNotification, now: DateTime<Utc>) {
        let entry = InboxEntry {
            id: uuid::Uuid::new_v4().to_string(),
            kind: notification.kind,
            title: notification.title,
            message: notification.message,
            timestamp: now,
            from: notification.from,
            read: false,
        };
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_INBOX_ENTRIES);
        self.save();
    }

    /// Pull everything waiting on a bus subscription. Returns how many arrived.
    pub fn drain(
        &mut self,
        receiver: &mut broadcast::Receiver<GardenNotification>,
        now: DateTime<Utc>,
    ) -> usize {
        let mut received = 0;
        loop {
            match receiver.try_recv() {
                Ok(notification) => {
                    self.receive(notification, now);
                    received += 1;
                }
                Err(TryRecvError::Lagged(skipped)) => {
                    log::warn!("Inbox fell behind; {} notifications dropped", skipped);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
        received
    }

    /// Returns false if no entry has this id.
    pub fn mark_read(&mut self, id: &str) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        entry.read = true;
        self.save();
        true
    }

    pub fn mark_all_read(&mut self) {
        for entry in &mut self.entries {
            entry.read = true;
        }
        self.save();
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        if let Err(e) = self.store.remove(NOTIFICATIONS_KEY) {
            log::warn!("Failed to clear notifications: {}", e);
        }
    }

    fn save(&self) {
        save_json_logged(self.store.as_ref(), NOTIFICATIONS_KEY, &self.entries);
    }
}
