//! Async hosts for the periodic processes.
//!
//! The terminal shell drives sessions synchronously from its frame loop; these
//! drivers are the alternative for a tokio runtime, with one task per process.

pub mod heart_hunt;
pub mod koala;

pub use heart_hunt::HeartHuntDriver;
pub use koala::KoalaDriver;
