//! In-process fan-out of [`GardenNotification`]s.

use super::types::GardenNotification;
use crate::core::constants::NOTIFICATION_CHANNEL_CAPACITY;
use crate::profile::{has_partner, UserProfile};
use crate::store::KeyValueStore;
use tokio::sync::broadcast;

/// Broadcast channel handed to each simulator at construction.
///
/// Publishing is fire-and-forget: having no subscribers is fine, and a slow
/// subscriber only loses its own backlog.
#[derive(Debug, Clone)]
pub struct NotificationBus {
    sender: broadcast::Sender<GardenNotification>,
}

impl NotificationBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(NOTIFICATION_CHANNEL_CAPACITY);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<GardenNotification> {
        self.sender.subscribe()
    }

    pub fn publish(&self, notification: GardenNotification) {
        log::debug!(
            "notification [{:?}] {}: {}",
            notification.kind,
            notification.title,
            notification.message
        );
        // Ignore send errors (no subscribers is fine)
        let _ = self.sender.send(notification);
    }

    /// Publish on behalf of `sender`, addressed to their partner.
    ///
    /// Dropped while the partner slot is still empty. Returns whether it was
    /// published.
    pub fn notify_partner(
        &self,
        store: &dyn KeyValueStore,
        sender: &UserProfile,
        notification: GardenNotification,
    ) -> bool {
        if !has_partner(store, sender) {
            log::debug!("No partner for {} yet, dropping {}", sender.id, notification.title);
            return false;
        }
        self.publish(notification);
        true
    }
}

impl Default for NotificationBus {
    fn default() -> Self {
        Self::new()
    }
}
