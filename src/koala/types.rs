//! Koala care data structures.

use crate::core::constants::{DECAY_INTERVAL_MS, DEFAULT_PET_NAME, STAT_MAX, STAT_MIN};
use crate::core::timers::TimerWheel;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The four bounded pet stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PetStat {
    Happiness,
    Hunger,
    Energy,
    Health,
}

impl PetStat {
    pub const ALL: [PetStat; 4] = [
        PetStat::Happiness,
        PetStat::Hunger,
        PetStat::Energy,
        PetStat::Health,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PetStat::Happiness => "Happiness",
            PetStat::Hunger => "Hunger",
            PetStat::Energy => "Energy",
            PetStat::Health => "Health",
        }
    }
}

/// Care actions a user can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CareAction {
    Feed,
    Play,
    Sleep,
    Pet,
}

impl CareAction {
    pub const ALL: [CareAction; 4] = [
        CareAction::Feed,
        CareAction::Play,
        CareAction::Sleep,
        CareAction::Pet,
    ];

    /// Identifier used by the command surface and in saved activity logs.
    pub fn id(&self) -> &'static str {
        match self {
            CareAction::Feed => "feed",
            CareAction::Play => "play",
            CareAction::Sleep => "sleep",
            CareAction::Pet => "pet",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.id() == id)
    }

    pub fn name(&self) -> &'static str {
        match self {
            CareAction::Feed => "Feed Eucalyptus",
            CareAction::Play => "Play Together",
            CareAction::Sleep => "Nap Time",
            CareAction::Pet => "Give Pets",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            CareAction::Feed => "🍃",
            CareAction::Play => "🎾",
            CareAction::Sleep => "😴",
            CareAction::Pet => "🤗",
        }
    }

    pub fn description(&self, pet_name: &str) -> String {
        match self {
            CareAction::Feed => format!("Give {} some fresh eucalyptus leaves", pet_name),
            CareAction::Play => format!("Play catch with {}", pet_name),
            CareAction::Sleep => format!("Help {} take a peaceful nap", pet_name),
            CareAction::Pet => format!("Show {} some love with gentle pets", pet_name),
        }
    }

    /// Minimum time between two effective invocations.
    pub fn cooldown(&self) -> Duration {
        match self {
            CareAction::Feed => Duration::seconds(30),
            CareAction::Play => Duration::seconds(45),
            CareAction::Sleep => Duration::seconds(60),
            CareAction::Pet => Duration::seconds(20),
        }
    }

    /// Additive stat deltas, applied then clamped to [0, 100].
    pub fn effects(&self) -> &'static [(PetStat, f64)] {
        match self {
            CareAction::Feed => &[
                (PetStat::Hunger, -30.0),
                (PetStat::Happiness, 10.0),
                (PetStat::Health, 5.0),
            ],
            CareAction::Play => &[
                (PetStat::Happiness, 20.0),
                (PetStat::Energy, -15.0),
                (PetStat::Hunger, 10.0),
            ],
            CareAction::Sleep => &[
                (PetStat::Energy, 30.0),
                (PetStat::Happiness, 10.0),
                (PetStat::Hunger, 5.0),
            ],
            CareAction::Pet => &[(PetStat::Happiness, 15.0), (PetStat::Health, 5.0)],
        }
    }

    /// Past-tense phrase placed between the actor and the pet's name.
    pub fn past_tense(&self) -> &'static str {
        match self {
            CareAction::Feed => "fed eucalyptus to",
            CareAction::Play => "played catch with",
            CareAction::Sleep => "tucked in",
            CareAction::Pet => "gave gentle pets to",
        }
    }

    /// "Ava played catch with Cuddles", for the activity log.
    pub fn activity_message(&self, actor: &str, pet_name: &str) -> String {
        format!("{} {} {}", actor, self.past_tense(), pet_name)
    }
}

/// Display state derived from the stats. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Happy,
    Sad,
    Hungry,
    Sleepy,
    Playful,
    Sick,
}

impl Mood {
    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Happy => "🐨😊",
            Mood::Sad => "🐨😢",
            Mood::Hungry => "🐨🍃",
            Mood::Sleepy => "🐨😴",
            Mood::Playful => "🐨🎾",
            Mood::Sick => "🐨🤧",
        }
    }

    pub fn description(&self, pet_name: &str) -> String {
        match self {
            Mood::Happy => format!("{} is feeling great!", pet_name),
            Mood::Sad => format!("{} needs some love", pet_name),
            Mood::Hungry => format!("{} is hungry", pet_name),
            Mood::Sleepy => format!("{} is getting sleepy", pet_name),
            Mood::Playful => format!("{} wants to play!", pet_name),
            Mood::Sick => format!("{} is not feeling well", pet_name),
        }
    }
}

/// Persisted pet state (`koalaStats`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PetStats {
    pub happiness: f64,
    pub hunger: f64,
    pub energy: f64,
    pub health: f64,
    pub last_fed: DateTime<Utc>,
    pub last_played: DateTime<Utc>,
    pub last_slept: DateTime<Utc>,
    pub level: u32,
    pub experience: u32,
    pub name: String,
}

impl PetStats {
    /// A fresh pet, as first met at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            happiness: 80.0,
            hunger: 60.0,
            energy: 70.0,
            health: 90.0,
            last_fed: now - Duration::hours(1),
            last_played: now - Duration::minutes(30),
            last_slept: now - Duration::hours(2),
            level: 1,
            experience: 0,
            name: DEFAULT_PET_NAME.to_string(),
        }
    }

    pub fn get(&self, stat: PetStat) -> f64 {
        match stat {
            PetStat::Happiness => self.happiness,
            PetStat::Hunger => self.hunger,
            PetStat::Energy => self.energy,
            PetStat::Health => self.health,
        }
    }

    /// Set a stat, clamped to [0, 100].
    pub fn set(&mut self, stat: PetStat, value: f64) {
        let value = clamp_stat(value);
        match stat {
            PetStat::Happiness => self.happiness = value,
            PetStat::Hunger => self.hunger = value,
            PetStat::Energy => self.energy = value,
            PetStat::Health => self.health = value,
        }
    }

    pub fn adjust(&mut self, stat: PetStat, delta: f64) {
        self.set(stat, self.get(stat) + delta);
    }

    /// Re-clamp every stat (after loading foreign data).
    pub fn clamp_all(&mut self) {
        for stat in PetStat::ALL {
            self.set(stat, self.get(stat));
        }
        self.level = self.level.max(1);
    }
}

impl Default for PetStats {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

/// Clamp to [0, 100]; NaN collapses to 0.
pub fn clamp_stat(value: f64) -> f64 {
    if value.is_nan() {
        return STAT_MIN;
    }
    value.clamp(STAT_MIN, STAT_MAX)
}

/// One entry of the care log (`koalaActivities`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub action: CareAction,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "performedBy")]
    pub actor_name: String,
    #[serde(rename = "performedByAvatar")]
    pub actor_avatar: String,
    pub message: String,
}

/// The pet's single periodic process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KoalaTimer {
    Decay,
}

/// Everything the simulator owns.
#[derive(Debug, Clone)]
pub struct KoalaState {
    pub stats: PetStats,
    /// Newest first, capped.
    pub activities: Vec<ActivityRecord>,
    /// When each action last took effect; kept for the life of the component.
    pub last_invoked: HashMap<CareAction, DateTime<Utc>>,
    pub(crate) timers: TimerWheel<KoalaTimer>,
}

impl KoalaState {
    pub fn new(stats: PetStats, activities: Vec<ActivityRecord>) -> Self {
        Self {
            stats,
            activities,
            last_invoked: HashMap::new(),
            timers: TimerWheel::new().with_timer(KoalaTimer::Decay, DECAY_INTERVAL_MS),
        }
    }

    pub fn is_active(&self) -> bool {
        self.timers.is_running()
    }
}

/// Result of an action that took effect.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    pub action: CareAction,
    pub leveled_up: bool,
    pub record: ActivityRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_pet_defaults() {
        let now = Utc::now();
        let stats = PetStats::new(now);
        assert_eq!(stats.happiness, 80.0);
        assert_eq!(stats.hunger, 60.0);
        assert_eq!(stats.energy, 70.0);
        assert_eq!(stats.health, 90.0);
        assert_eq!(stats.level, 1);
        assert_eq!(stats.experience, 0);
        assert_eq!(stats.name, "Cuddles");
        assert_eq!(now - stats.last_fed, Duration::hours(1));
        assert_eq!(now - stats.last_played, Duration::minutes(30));
        assert_eq!(now - stats.last_slept, Duration::hours(2));
    }

    #[test]
    fn test_action_ids_roundtrip() {
        for action in CareAction::ALL {
            assert_eq!(CareAction::from_id(action.id()), Some(action));
        }
        assert_eq!(CareAction::from_id("dance"), None);
    }

    #[test]
    fn test_action_table() {
        assert_eq!(CareAction::Feed.cooldown(), Duration::seconds(30));
        assert_eq!(CareAction::Play.cooldown(), Duration::seconds(45));
        assert_eq!(CareAction::Sleep.cooldown(), Duration::seconds(60));
        assert_eq!(CareAction::Pet.cooldown(), Duration::seconds(20));

        assert!(CareAction::Feed
            .effects()
            .contains(&(PetStat::Hunger, -30.0)));
        assert!(CareAction::Pet.effects().contains(&(PetStat::Health, 5.0)));
        assert!(!CareAction::Pet
            .effects()
            .iter()
            .any(|(stat, _)| *stat == PetStat::Energy));
    }

    #[test]
    fn test_set_clamps() {
        let mut stats = PetStats::new(Utc::now());
        stats.set(PetStat::Hunger, 140.0);
        assert_eq!(stats.hunger, 100.0);
        stats.adjust(PetStat::Energy, -500.0);
        assert_eq!(stats.energy, 0.0);
        stats.set(PetStat::Health, f64::NAN);
        assert_eq!(stats.health, 0.0);
    }

    #[test]
    fn test_activity_record_uses_saved_field_names() {
        let record = ActivityRecord {
            id: "1".to_string(),
            action: CareAction::Pet,
            timestamp: Utc::now(),
            actor_name: "Ava".to_string(),
            actor_avatar: "🐰".to_string(),
            message: CareAction::Pet.activity_message("Ava", "Cuddles"),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], "pet");
        assert_eq!(value["performedBy"], "Ava");
        assert_eq!(value["performedByAvatar"], "🐰");
    }

    #[test]
    fn test_activity_message() {
        assert_eq!(
            CareAction::Play.activity_message("Ava", "Cuddles"),
            "Ava played catch with Cuddles"
        );
    }

    #[test]
    fn test_mood_description_names_pet() {
        assert_eq!(Mood::Hungry.description("Cuddles"), "Cuddles is hungry");
    }
}
