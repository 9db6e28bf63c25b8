//! Koala care logic: decay, mood, cooldown-gated actions.

use super::types::{
    ActionOutcome, ActivityRecord, CareAction, KoalaState, KoalaTimer, Mood, PetStat, PetStats,
};
use crate::core::constants::{
    DECAY_ENERGY, DECAY_HAPPINESS, DECAY_HUNGER, MAX_ACTIVITIES, XP_PER_ACTION, XP_PER_PET_LEVEL,
};
use crate::core::timers::Epoch;
use crate::profile::UserProfile;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One decay step: hunger rises, energy and happiness fall.
pub fn apply_decay(stats: &mut PetStats) {
    stats.adjust(PetStat::Hunger, DECAY_HUNGER);
    stats.adjust(PetStat::Energy, -DECAY_ENERGY);
    stats.adjust(PetStat::Happiness, -DECAY_HAPPINESS);
}

/// First matching rule wins.
pub fn mood(stats: &PetStats) -> Mood {
    if stats.health < 30.0 {
        Mood::Sick
    } else if stats.hunger > 80.0 {
        Mood::Hungry
    } else if stats.energy < 20.0 {
        Mood::Sleepy
    } else if stats.happiness > 80.0 {
        Mood::Playful
    } else if stats.happiness < 40.0 {
        Mood::Sad
    } else {
        Mood::Happy
    }
}

pub fn is_on_cooldown(state: &KoalaState, action: CareAction, now: DateTime<Utc>) -> bool {
    cooldown_remaining_ms(state, action, now) > 0
}

fn cooldown_remaining_ms(state: &KoalaState, action: CareAction, now: DateTime<Utc>) -> i64 {
    match state.last_invoked.get(&action) {
        Some(last) => {
            let elapsed = now.signed_duration_since(*last);
            (action.cooldown() - elapsed).num_milliseconds().max(0)
        }
        None => 0,
    }
}

/// Whole seconds until `action` is available again, rounded up.
pub fn cooldown_remaining_secs(state: &KoalaState, action: CareAction, now: DateTime<Utc>) -> u64 {
    let ms = cooldown_remaining_ms(state, action, now) as u64;
    ms.div_ceil(1000)
}

/// Add experience, rolling over into a level. Returns true on level-up.
pub fn gain_experience(stats: &mut PetStats, amount: u32) -> bool {
    stats.experience = stats.experience.saturating_add(amount);
    if stats.experience >= stats.level.saturating_mul(XP_PER_PET_LEVEL) {
        stats.level = stats.level.saturating_add(1);
        stats.experience = 0;
        return true;
    }
    false
}

/// Apply a care action on behalf of `actor`.
///
/// `None` when the action is still cooling down; nothing changes then.
pub fn perform_action(
    state: &mut KoalaState,
    action: CareAction,
    actor: &UserProfile,
    now: DateTime<Utc>,
) -> Option<ActionOutcome> {
    if is_on_cooldown(state, action, now) {
        log::debug!("{} is cooling down", action.id());
        return None;
    }

    for (stat, delta) in action.effects() {
        state.stats.adjust(*stat, *delta);
    }
    let leveled_up = gain_experience(&mut state.stats, XP_PER_ACTION);

    match action {
        CareAction::Feed => state.stats.last_fed = now,
        CareAction::Play => state.stats.last_played = now,
        CareAction::Sleep => state.stats.last_slept = now,
        CareAction::Pet => {}
    }

    let record = ActivityRecord {
        id: Uuid::new_v4().to_string(),
        action,
        timestamp: now,
        actor_name: actor.name.clone(),
        actor_avatar: actor.avatar.clone(),
        message: action.activity_message(&actor.name, &state.stats.name),
    };
    state.activities.insert(0, record.clone());
    state.activities.truncate(MAX_ACTIVITIES);
    state.last_invoked.insert(action, now);

    if leveled_up {
        log::info!("{} reached level {}", state.stats.name, state.stats.level);
    }

    Some(ActionOutcome {
        action,
        leveled_up,
        record,
    })
}

/// Start the decay process. Idempotent while active.
pub fn activate(state: &mut KoalaState) -> Epoch {
    if state.timers.is_running() {
        return state.timers.epoch();
    }
    state.timers.start()
}

pub fn deactivate(state: &mut KoalaState) {
    if state.timers.is_running() {
        state.timers.stop();
    }
}

/// Run one decay step if `epoch` is still the armed one.
pub fn fire_decay(state: &mut KoalaState, epoch: Epoch) -> bool {
    if !state.timers.is_current(epoch) {
        log::debug!("Dropping stale decay tick");
        return false;
    }
    apply_decay(&mut state.stats);
    true
}

/// Advance wall time by `elapsed_ms`. Returns the number of decay steps run.
pub fn update(state: &mut KoalaState, elapsed_ms: u64) -> u32 {
    let mut budget = elapsed_ms;
    let mut steps = 0;
    while let Some(KoalaTimer::Decay) = state.timers.next_due(&mut budget) {
        let epoch = state.timers.epoch();
        if fire_decay(state, epoch) {
            steps += 1;
        }
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn fresh(now: DateTime<Utc>) -> KoalaState {
        KoalaState::new(PetStats::new(now), Vec::new())
    }

    fn actor() -> UserProfile {
        UserProfile::placeholder("Keychain")
    }

    #[test]
    fn test_decay_step() {
        let mut stats = PetStats::new(Utc::now());
        apply_decay(&mut stats);
        assert_eq!(stats.hunger, 61.0);
        assert_eq!(stats.energy, 69.5);
        assert!((stats.happiness - 79.7).abs() < 1e-9);
        assert_eq!(stats.health, 90.0);
    }

    #[test]
    fn test_decay_clamps() {
        let mut stats = PetStats::new(Utc::now());
        stats.hunger = 99.5;
        stats.energy = 0.2;
        stats.happiness = 0.0;
        apply_decay(&mut stats);
        assert_eq!(stats.hunger, 100.0);
        assert_eq!(stats.energy, 0.0);
        assert_eq!(stats.happiness, 0.0);
    }

    #[test]
    fn test_feed_then_cooldown() {
        let t0 = Utc::now();
        let mut state = fresh(t0);

        let outcome = perform_action(&mut state, CareAction::Feed, &actor(), t0).unwrap();
        assert!(!outcome.leveled_up);
        assert_eq!(state.stats.hunger, 30.0);
        assert_eq!(state.stats.happiness, 90.0);
        assert_eq!(state.stats.health, 95.0);
        assert_eq!(state.stats.experience, 10);
        assert_eq!(state.stats.last_fed, t0);
        assert_eq!(state.activities.len(), 1);

        let t1 = t0 + Duration::seconds(10);
        assert!(perform_action(&mut state, CareAction::Feed, &actor(), t1).is_none());
        assert_eq!(state.stats.hunger, 30.0);
        assert_eq!(state.stats.experience, 10);
        assert_eq!(state.activities.len(), 1);
        assert_eq!(cooldown_remaining_secs(&state, CareAction::Feed, t1), 20);

        let t2 = t0 + Duration::seconds(30);
        assert!(perform_action(&mut state, CareAction::Feed, &actor(), t2).is_some());
        assert_eq!(state.stats.hunger, 0.0);
        assert_eq!(state.activities.len(), 2);
    }

    #[test]
    fn test_cooldowns_are_per_action() {
        let t0 = Utc::now();
        let mut state = fresh(t0);
        assert!(perform_action(&mut state, CareAction::Feed, &actor(), t0).is_some());
        assert!(perform_action(&mut state, CareAction::Pet, &actor(), t0).is_some());
        assert!(is_on_cooldown(&state, CareAction::Feed, t0));
        assert!(!is_on_cooldown(&state, CareAction::Play, t0));
    }

    #[test]
    fn test_cooldown_remaining_rounds_up() {
        let t0 = Utc::now();
        let mut state = fresh(t0);
        perform_action(&mut state, CareAction::Pet, &actor(), t0);
        let later = t0 + Duration::milliseconds(19_001);
        assert_eq!(cooldown_remaining_secs(&state, CareAction::Pet, later), 1);
        let ready = t0 + Duration::seconds(20);
        assert_eq!(cooldown_remaining_secs(&state, CareAction::Pet, ready), 0);
        assert_eq!(cooldown_remaining_secs(&state, CareAction::Sleep, t0), 0);
    }

    #[test]
    fn test_effects_clamp_at_bounds() {
        let t0 = Utc::now();
        let mut state = fresh(t0);
        state.stats.happiness = 95.0;
        state.stats.energy = 10.0;
        perform_action(&mut state, CareAction::Play, &actor(), t0);
        assert_eq!(state.stats.happiness, 100.0);
        assert_eq!(state.stats.energy, 0.0);
        assert_eq!(state.stats.hunger, 70.0);
        assert_eq!(state.stats.last_played, t0);
    }

    #[test]
    fn test_level_up_resets_experience() {
        let t0 = Utc::now();
        let mut state = fresh(t0);
        state.stats.experience = 95;
        let outcome = perform_action(&mut state, CareAction::Pet, &actor(), t0).unwrap();
        assert!(outcome.leveled_up);
        assert_eq!(state.stats.level, 2);
        assert_eq!(state.stats.experience, 0);
    }

    #[test]
    fn test_level_threshold_scales() {
        let mut stats = PetStats::new(Utc::now());
        stats.level = 2;
        stats.experience = 180;
        assert!(!gain_experience(&mut stats, 10));
        assert_eq!(stats.experience, 190);
        assert!(gain_experience(&mut stats, 10));
        assert_eq!(stats.level, 3);
    }

    #[test]
    fn test_activity_log_is_capped_newest_first() {
        let t0 = Utc::now();
        let mut state = fresh(t0);
        for i in 0..25 {
            let at = t0 + Duration::seconds(i * 30);
            assert!(perform_action(&mut state, CareAction::Feed, &actor(), at).is_some());
        }
        assert_eq!(state.activities.len(), MAX_ACTIVITIES);
        assert_eq!(state.activities[0].timestamp, t0 + Duration::seconds(24 * 30));
        assert_eq!(state.activities[0].actor_name, "Keychain");
    }

    #[test]
    fn test_mood_priority() {
        let mut stats = PetStats::new(Utc::now());
        assert_eq!(mood(&stats), Mood::Happy);

        stats.happiness = 85.0;
        assert_eq!(mood(&stats), Mood::Playful);

        stats.energy = 10.0;
        assert_eq!(mood(&stats), Mood::Sleepy);

        stats.hunger = 90.0;
        assert_eq!(mood(&stats), Mood::Hungry);

        stats.health = 20.0;
        assert_eq!(mood(&stats), Mood::Sick);

        let mut sad = PetStats::new(Utc::now());
        sad.happiness = 30.0;
        assert_eq!(mood(&sad), Mood::Sad);
    }

    #[test]
    fn test_update_only_decays_while_active() {
        let mut state = fresh(Utc::now());
        assert_eq!(update(&mut state, 120_000), 0);
        assert_eq!(state.stats.hunger, 60.0);

        activate(&mut state);
        assert_eq!(update(&mut state, 29_999), 0);
        assert_eq!(update(&mut state, 1), 1);
        assert_eq!(update(&mut state, 60_000), 2);
        assert_eq!(state.stats.hunger, 63.0);

        deactivate(&mut state);
        assert_eq!(update(&mut state, 60_000), 0);
        assert!(!state.is_active());
    }

    #[test]
    fn test_stale_decay_is_dropped() {
        let mut state = fresh(Utc::now());
        let epoch = activate(&mut state);
        assert_eq!(activate(&mut state), epoch);
        deactivate(&mut state);
        assert!(!fire_decay(&mut state, epoch));
        assert_eq!(state.stats.hunger, 60.0);

        let epoch = activate(&mut state);
        assert!(fire_decay(&mut state, epoch));
        assert_eq!(state.stats.hunger, 61.0);
    }
}
