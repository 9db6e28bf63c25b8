//! "Us", the shared playlist.

pub mod logic;
pub mod session;
pub mod types;

pub use logic::*;
pub use session::Playlist;
pub use types::*;
