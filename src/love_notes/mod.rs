//! Love notes: short messages left for the other user, each with a heart.

pub mod logic;
pub mod session;
pub mod types;

pub use logic::*;
pub use session::LoveNotesBoard;
pub use types::*;
