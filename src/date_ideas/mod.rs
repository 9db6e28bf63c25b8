//! Date ideas: a shared wishlist of outings with ratings and a schedule.

pub mod logic;
pub mod session;
pub mod types;

pub use logic::*;
pub use session::DateIdeasBoard;
pub use types::*;
