//! Cross-panel notifications.
//!
//! Simulators publish [`GardenNotification`]s on a [`NotificationBus`]; the
//! shell files them into a persisted [`NotificationInbox`] for the other user.

pub mod bus;
pub mod inbox;
pub mod types;

pub use bus::NotificationBus;
pub use inbox::{InboxEntry, NotificationInbox};
pub use types::{GardenNotification, NotificationKind};
