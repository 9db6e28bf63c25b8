//! Koala persistence (`koalaStats`, `koalaActivities`).

use super::types::{ActivityRecord, PetStats};
use crate::core::constants::{KOALA_ACTIVITIES_KEY, KOALA_STATS_KEY, MAX_ACTIVITIES};
use crate::store::{load_json, save_json_logged, KeyValueStore};
use chrono::{DateTime, Utc};

/// Saved pet, or a fresh one met at `now`.
pub fn load_pet_stats(store: &dyn KeyValueStore, now: DateTime<Utc>) -> PetStats {
    match load_json::<PetStats>(store, KOALA_STATS_KEY) {
        Some(mut stats) => {
            stats.clamp_all();
            stats
        }
        None => PetStats::new(now),
    }
}

pub fn save_pet_stats(store: &dyn KeyValueStore, stats: &PetStats) {
    save_json_logged(store, KOALA_STATS_KEY, stats);
}

/// Saved care log, newest first, at most the 20 most recent.
pub fn load_activities(store: &dyn KeyValueStore) -> Vec<ActivityRecord> {
    let mut activities: Vec<ActivityRecord> =
        load_json(store, KOALA_ACTIVITIES_KEY).unwrap_or_default();
    activities.truncate(MAX_ACTIVITIES);
    activities
}

pub fn save_activities(store: &dyn KeyValueStore, activities: &[ActivityRecord]) {
    save_json_logged(store, KOALA_ACTIVITIES_KEY, &activities);
}
