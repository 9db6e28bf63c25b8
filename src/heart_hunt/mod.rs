//! Heart Hunt minigame.
//!
//! Collectibles and bombs fall down the playfield on three independent
//! periodic processes (advance, spawn, clock). Clicking an element collects
//! it; letting a non-bomb fall out costs a life. Three lives per session.

pub mod logic;
pub mod persistence;
pub mod session;
pub mod types;

pub use logic::*;
pub use persistence::{load_game_stats, save_game_stats};
pub use session::HeartHuntSession;
pub use types::*;
