//! A Heart Hunt game bound to its store, notification bus and player.

use super::logic;
use super::persistence::{load_game_stats, save_game_stats};
use super::types::{GameOverSummary, HeartHuntEvent, HeartHuntGame, HeartHuntTimer, Playfield};
use crate::core::timers::Epoch;
use crate::notifications::{GardenNotification, NotificationBus, NotificationKind};
use crate::profile::UserProfile;
use crate::store::KeyValueStore;
use rand::Rng;
use std::sync::Arc;

/// Command surface for the presentation shell.
///
/// Owns the game exclusively; the shell reads [`game`](Self::game) and
/// forwards input. Stats are persisted when a session ends, and a new high
/// score is announced on the bus.
pub struct HeartHuntSession {
    game: HeartHuntGame,
    store: Arc<dyn KeyValueStore>,
    bus: NotificationBus,
    player: UserProfile,
}

impl HeartHuntSession {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        bus: NotificationBus,
        player: UserProfile,
        playfield: Playfield,
    ) -> Self {
        let stats = load_game_stats(store.as_ref());
        Self {
            game: HeartHuntGame::new(stats, playfield),
            store,
            bus,
            player,
        }
    }

    /// Read-only snapshot for rendering.
    pub fn game(&self) -> &HeartHuntGame {
        &self.game
    }

    pub fn player(&self) -> &UserProfile {
        &self.player
    }

    pub fn start(&mut self) -> bool {
        logic::start_game(&mut self.game)
    }

    pub fn pause(&mut self) -> bool {
        logic::pause_game(&mut self.game)
    }

    pub fn resume(&mut self) -> bool {
        logic::resume_game(&mut self.game)
    }

    pub fn dismiss(&mut self) -> bool {
        logic::dismiss_game(&mut self.game)
    }

    /// End the running session. Empty if nothing was running.
    pub fn end(&mut self) -> Vec<HeartHuntEvent> {
        let events: Vec<HeartHuntEvent> = logic::end_game(&mut self.game)
            .map(HeartHuntEvent::GameOver)
            .into_iter()
            .collect();
        self.apply(events)
    }

    pub fn collect(&mut self, element_id: u64) -> Vec<HeartHuntEvent> {
        let events = logic::collect_element(&mut self.game, element_id);
        self.apply(events)
    }

    /// Synchronous host: advance wall time and run every due process.
    pub fn update<R: Rng>(&mut self, elapsed_ms: u64, rng: &mut R) -> Vec<HeartHuntEvent> {
        let events = logic::update(&mut self.game, elapsed_ms, rng);
        self.apply(events)
    }

    /// Async host entry point: run one process armed under `epoch`.
    ///
    /// Returns `None` if the fire is stale and its timer should stop.
    pub fn fire_timer<R: Rng>(
        &mut self,
        timer: HeartHuntTimer,
        epoch: Epoch,
        rng: &mut R,
    ) -> Option<Vec<HeartHuntEvent>> {
        let events = logic::fire_timer(&mut self.game, timer, epoch, rng)?;
        Some(self.apply(events))
    }

    fn apply(&mut self, events: Vec<HeartHuntEvent>) -> Vec<HeartHuntEvent> {
        for event in &events {
            if let HeartHuntEvent::GameOver(summary) = event {
                self.on_game_over(summary);
            }
        }
        events
    }

    fn on_game_over(&self, summary: &GameOverSummary) {
        save_game_stats(self.store.as_ref(), &self.game.stats);

        if summary.new_high_score {
            let note = GardenNotification::new(
                NotificationKind::Heart,
                "New High Score!",
                format!(
                    "{} just scored {} points in Heart Hunt! 🎉",
                    self.player.name, summary.score
                ),
                self.player.name.clone(),
            );
            self.bus.notify_partner(self.store.as_ref(), &self.player, note);
        }
    }
}
