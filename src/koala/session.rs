//! A koala bound to its store, notification bus and caretaker.

use super::logic;
use super::persistence::{load_activities, load_pet_stats, save_activities, save_pet_stats};
use super::types::{ActionOutcome, ActivityRecord, CareAction, KoalaState, Mood, PetStats};
use crate::core::timers::Epoch;
use crate::notifications::{GardenNotification, NotificationBus, NotificationKind};
use crate::profile::UserProfile;
use crate::store::KeyValueStore;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Command surface for the Koala panel.
///
/// Decay only mutates memory; stats hit the store on the next care action.
pub struct KoalaSession {
    state: KoalaState,
    store: Arc<dyn KeyValueStore>,
    bus: NotificationBus,
    player: UserProfile,
}

impl KoalaSession {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        bus: NotificationBus,
        player: UserProfile,
        now: DateTime<Utc>,
    ) -> Self {
        let stats = load_pet_stats(store.as_ref(), now);
        let activities = load_activities(store.as_ref());
        Self {
            state: KoalaState::new(stats, activities),
            store,
            bus,
            player,
        }
    }

    pub fn state(&self) -> &KoalaState {
        &self.state
    }

    pub fn stats(&self) -> &PetStats {
        &self.state.stats
    }

    pub fn activities(&self) -> &[ActivityRecord] {
        &self.state.activities
    }

    pub fn mood(&self) -> Mood {
        logic::mood(&self.state.stats)
    }

    pub fn player(&self) -> &UserProfile {
        &self.player
    }

    pub fn activate(&mut self) -> Epoch {
        logic::activate(&mut self.state)
    }

    pub fn deactivate(&mut self) {
        logic::deactivate(&mut self.state)
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn update(&mut self, elapsed_ms: u64) -> u32 {
        logic::update(&mut self.state, elapsed_ms)
    }

    pub fn fire_decay(&mut self, epoch: Epoch) -> bool {
        logic::fire_decay(&mut self.state, epoch)
    }

    pub fn cooldown_remaining_secs(&self, action: CareAction, now: DateTime<Utc>) -> u64 {
        logic::cooldown_remaining_secs(&self.state, action, now)
    }

    /// Perform the action named `action_id`. Unknown ids are ignored.
    pub fn perform_action(&mut self, action_id: &str, now: DateTime<Utc>) -> Option<ActionOutcome> {
        let Some(action) = CareAction::from_id(action_id) else {
            log::debug!("Unknown care action {:?}", action_id);
            return None;
        };
        self.perform(action, now)
    }

    pub fn perform(&mut self, action: CareAction, now: DateTime<Utc>) -> Option<ActionOutcome> {
        let outcome = logic::perform_action(&mut self.state, action, &self.player, now)?;

        save_pet_stats(self.store.as_ref(), &self.state.stats);
        save_activities(self.store.as_ref(), &self.state.activities);

        let note = GardenNotification::new(
            NotificationKind::Koala,
            "Koala Care Update",
            format!(
                "{} {} {}! {}",
                self.player.name,
                action.past_tense(),
                self.state.stats.name,
                action.emoji()
            ),
            self.player.name.clone(),
        );
        self.bus.notify_partner(self.store.as_ref(), &self.player, note);

        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{KOALA_ACTIVITIES_KEY, KOALA_STATS_KEY};
    use crate::profile::save_profile;
    use crate::store::MemoryStore;
    use chrono::Duration;

    fn session_with(store: Arc<dyn KeyValueStore>, bus: NotificationBus) -> KoalaSession {
        KoalaSession::new(store, bus, UserProfile::placeholder("Bug"), Utc::now())
    }

    fn store_with_partner() -> Arc<dyn KeyValueStore> {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        save_profile(store.as_ref(), &UserProfile::placeholder("Keychain")).unwrap();
        store
    }

    #[test]
    fn test_action_persists_and_notifies() {
        let store = store_with_partner();
        let bus = NotificationBus::new();
        let mut rx = bus.subscribe();
        let mut session = session_with(store.clone(), bus);

        let now = Utc::now();
        assert!(session.perform_action("sleep", now).is_some());
        assert!(store.get(KOALA_STATS_KEY).is_some());
        assert!(store.get(KOALA_ACTIVITIES_KEY).is_some());

        let note = rx.try_recv().expect("care update should be published");
        assert_eq!(note.kind, NotificationKind::Koala);
        assert_eq!(note.title, "Koala Care Update");
        assert_eq!(note.message, "Bug tucked in Cuddles! 😴");
        assert_eq!(note.from, "Bug");

        let reloaded = session_with(store, NotificationBus::new());
        assert_eq!(reloaded.stats().energy, 100.0);
        assert_eq!(reloaded.activities().len(), 1);
        assert_eq!(reloaded.activities()[0].actor_avatar, "🐨");
    }

    #[test]
    fn test_unknown_action_is_ignored() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let bus = NotificationBus::new();
        let mut rx = bus.subscribe();
        let mut session = session_with(store.clone(), bus);
        let before = session.stats().clone();

        assert!(session.perform_action("dance", Utc::now()).is_none());
        assert_eq!(session.stats(), &before);
        assert!(store.get(KOALA_STATS_KEY).is_none());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_cooldown_blocks_second_notification() {
        let store = store_with_partner();
        let bus = NotificationBus::new();
        let mut rx = bus.subscribe();
        let mut session = session_with(store, bus);

        let now = Utc::now();
        session.perform(CareAction::Pet, now);
        session.perform(CareAction::Pet, now + Duration::seconds(5));
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
        assert_eq!(session.cooldown_remaining_secs(CareAction::Pet, now), 20);
    }

    #[test]
    fn test_solo_caretaker_sends_nothing() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let bus = NotificationBus::new();
        let mut rx = bus.subscribe();
        let mut session = session_with(store.clone(), bus);

        assert!(session.perform(CareAction::Feed, Utc::now()).is_some());
        assert!(store.get(KOALA_STATS_KEY).is_some());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_decay_is_not_saved_until_next_action() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut session = session_with(store.clone(), NotificationBus::new());
        session.activate();
        assert_eq!(session.update(90_000), 3);
        assert_eq!(session.stats().hunger, 63.0);
        assert!(store.get(KOALA_STATS_KEY).is_none());

        session.perform(CareAction::Feed, Utc::now());
        let saved = load_pet_stats(store.as_ref(), Utc::now());
        assert_eq!(saved.hunger, 33.0);
    }
}
