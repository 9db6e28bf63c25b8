//! Heart Hunt stats persistence (`heartGameStats`).

use super::types::GameStats;
use crate::core::constants::{HEART_GAME_STATS_KEY, STARTING_LEVEL, STARTING_LIVES};
use crate::store::{load_json, save_json_logged, KeyValueStore};

/// Load saved stats, or defaults if missing or malformed.
pub fn load_game_stats(store: &dyn KeyValueStore) -> GameStats {
    let mut stats: GameStats = load_json(store, HEART_GAME_STATS_KEY).unwrap_or_default();
    stats.lives = stats.lives.min(STARTING_LIVES);
    stats.level = stats.level.max(STARTING_LEVEL);
    stats
}

pub fn save_game_stats(store: &dyn KeyValueStore, stats: &GameStats) {
    save_json_logged(store, HEART_GAME_STATS_KEY, stats);
}
