//! Koala care simulator.
//!
//! A virtual pet with four bounded stats that slowly decay while the panel is
//! active, and four care actions that each have their own cooldown.

pub mod logic;
pub mod persistence;
pub mod session;
pub mod types;

pub use logic::*;
pub use persistence::{load_activities, load_pet_stats, save_activities, save_pet_stats};
pub use session::KoalaSession;
pub use types::*;
