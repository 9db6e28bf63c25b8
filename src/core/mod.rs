//! Shared building blocks: tuning constants, timers, and display formatting.

pub mod constants;
pub mod format;
pub mod timers;

pub use constants::*;
pub use format::{format_clock, time_ago};
pub use timers::{Epoch, TimerWheel};
