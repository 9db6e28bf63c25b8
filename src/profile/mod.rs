//! The two garden users and the passcode gate in front of them.

pub mod passcode;
pub mod registry;
pub mod types;

pub use passcode::{passcode_digest, PasscodeGate};
pub use registry::*;
pub use types::{partner_id, Theme, UserProfile, AVATARS};
