//! Heart Hunt data structures.
//!
//! A real-time arcade minigame: hearts, stars, flowers and bombs fall down the
//! playfield and the player collects them before they hit the bottom.

use crate::core::constants::{
    ADVANCE_TICK_MS, CLOCK_TICK_MS, SPAWN_BASE_PERIOD_MS, SPAWN_MIN_PERIOD_MS,
    SPAWN_PERIOD_STEP_MS, STARTING_LEVEL, STARTING_LIVES,
};
use crate::core::timers::{Epoch, TimerWheel};
use serde::{Deserialize, Serialize};

/// Kinds of falling elements, in spawn-table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Heart,
    Star,
    Flower,
    Bomb,
}

impl ElementKind {
    /// Spawn table order; weighted sampling walks it front to back.
    pub const ALL: [ElementKind; 4] = [
        ElementKind::Heart,
        ElementKind::Star,
        ElementKind::Flower,
        ElementKind::Bomb,
    ];

    pub fn points(&self) -> i32 {
        match self {
            ElementKind::Heart => 10,
            ElementKind::Star => 25,
            ElementKind::Flower => 15,
            ElementKind::Bomb => -20,
        }
    }

    pub fn spawn_weight(&self) -> u32 {
        match self {
            ElementKind::Heart => 40,
            ElementKind::Star => 20,
            ElementKind::Flower => 25,
            ElementKind::Bomb => 15,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            ElementKind::Heart => "💖",
            ElementKind::Star => "⭐",
            ElementKind::Flower => "🌸",
            ElementKind::Bomb => "💣",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Heart => "Heart",
            ElementKind::Star => "Star",
            ElementKind::Flower => "Flower",
            ElementKind::Bomb => "Bomb",
        }
    }

    /// Bombs cost a life when collected and are harmless when missed.
    pub fn is_hazard(&self) -> bool {
        matches!(self, ElementKind::Bomb)
    }
}

/// Sum of all spawn weights.
pub fn total_spawn_weight() -> u32 {
    ElementKind::ALL.iter().map(|k| k.spawn_weight()).sum()
}

/// Pick a kind from a roll in `[0, total_spawn_weight())`.
///
/// Cumulative sampling; a roll landing exactly on a weight boundary belongs to
/// the earlier kind. Out-of-range rolls fall back to the first kind.
pub fn pick_kind(roll: f64) -> ElementKind {
    let mut remaining = roll;
    for kind in ElementKind::ALL {
        let weight = kind.spawn_weight() as f64;
        if remaining <= weight {
            return kind;
        }
        remaining -= weight;
    }
    ElementKind::ALL[0]
}

/// A falling collectible or hazard.
#[derive(Debug, Clone, PartialEq)]
pub struct GameElement {
    pub id: u64,
    pub kind: ElementKind,
    /// Horizontal position of the element's left edge.
    pub x: f64,
    /// Vertical position; grows downward, negative while above the playfield.
    pub y: f64,
    pub points: i32,
    /// Distance fallen per advance tick.
    pub fall_speed: f64,
}

/// Score and lifetime totals. Persisted under `heartGameStats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameStats {
    pub score: u32,
    #[serde(rename = "hearts")]
    pub hearts_collected: u32,
    pub level: u32,
    pub lives: u32,
    pub streak: u32,
    pub high_score: u32,
    pub games_played: u32,
    #[serde(rename = "totalHearts")]
    pub total_hearts_collected: u32,
}

impl Default for GameStats {
    fn default() -> Self {
        Self {
            score: 0,
            hearts_collected: 0,
            level: STARTING_LEVEL,
            lives: STARTING_LIVES,
            streak: 0,
            high_score: 0,
            games_played: 0,
            total_hearts_collected: 0,
        }
    }
}

impl GameStats {
    /// Reset the per-session fields, keeping lifetime totals.
    pub fn reset_session(&mut self) {
        self.score = 0;
        self.hearts_collected = 0;
        self.level = STARTING_LEVEL;
        self.lives = STARTING_LIVES;
        self.streak = 0;
    }
}

/// Session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Idle,
    Playing,
    Paused,
    Ended,
}

/// The three periodic processes of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeartHuntTimer {
    /// Move elements down and detect misses.
    Advance,
    /// Drop a new element in.
    Spawn,
    /// Count elapsed seconds.
    Clock,
}

/// Playfield dimensions in playfield units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f64,
    /// Elements whose `y` exceeds this have fallen out.
    pub height: f64,
}

impl Playfield {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Spawn period for a level: shortens by a fixed step, bounded below.
pub fn spawn_period_ms(level: u32) -> u64 {
    SPAWN_BASE_PERIOD_MS
        .saturating_sub(level as u64 * SPAWN_PERIOD_STEP_MS)
        .max(SPAWN_MIN_PERIOD_MS)
}

/// Summary produced when a session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverSummary {
    pub score: u32,
    pub hearts_collected: u32,
    pub level: u32,
    pub elapsed_secs: u64,
    pub previous_high_score: u32,
    pub new_high_score: bool,
}

/// Something that happened during a command or timer fire.
///
/// The shell maps these to banners ("BOMB!", "5x COMBO! +10", "LEVEL UP!");
/// the session maps `GameOver` to persistence and notifications.
#[derive(Debug, Clone, PartialEq)]
pub enum HeartHuntEvent {
    ElementSpawned { id: u64, kind: ElementKind },
    /// A non-bomb element fell out of the playfield.
    ElementMissed { id: u64, kind: ElementKind },
    Collected { id: u64, kind: ElementKind, points: i32 },
    BombHit { id: u64 },
    ComboBonus { streak: u32, bonus: u32 },
    LevelUp { level: u32 },
    GameOver(GameOverSummary),
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct HeartHuntGame {
    pub phase: GamePhase,
    pub stats: GameStats,
    /// Active elements, oldest first.
    pub elements: Vec<GameElement>,
    /// Seconds of play in the current session.
    pub elapsed_secs: u64,
    pub playfield: Playfield,
    pub(crate) next_element_id: u64,
    pub(crate) timers: TimerWheel<HeartHuntTimer>,
}

impl HeartHuntGame {
    /// Create an idle game around previously saved stats.
    pub fn new(stats: GameStats, playfield: Playfield) -> Self {
        let timers = TimerWheel::new()
            .with_timer(HeartHuntTimer::Advance, ADVANCE_TICK_MS)
            .with_timer(HeartHuntTimer::Spawn, spawn_period_ms(stats.level))
            .with_timer(HeartHuntTimer::Clock, CLOCK_TICK_MS);
        Self {
            phase: GamePhase::Idle,
            stats,
            elements: Vec::new(),
            elapsed_secs: 0,
            playfield,
            next_element_id: 1,
            timers,
        }
    }

    pub fn element(&self, id: u64) -> Option<&GameElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Epoch the current timers were armed under.
    pub fn epoch(&self) -> Epoch {
        self.timers.epoch()
    }

    /// Current period of one of the periodic processes.
    pub fn timer_period_ms(&self, timer: HeartHuntTimer) -> u64 {
        self.timers.period(timer).unwrap_or(match timer {
            HeartHuntTimer::Advance => ADVANCE_TICK_MS,
            HeartHuntTimer::Spawn => spawn_period_ms(self.stats.level),
            HeartHuntTimer::Clock => CLOCK_TICK_MS,
        })
    }
}
