//! Shared diary: longer entries with a mood, tags and an optional place.

pub mod logic;
pub mod session;
pub mod types;

pub use logic::*;
pub use session::DiaryBook;
pub use types::*;
