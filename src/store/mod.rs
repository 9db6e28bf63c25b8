//! Persistence: the injected key-value store and JSON helpers on top of it.
//!
//! Everything lives under `~/.garden/` when running the terminal shell.

pub mod json;
pub mod kv;

pub use json::{load_json, load_json_or_default, save_json, save_json_logged};
pub use kv::{FileStore, KeyValueStore, MemoryStore};

use std::io;
use std::path::PathBuf;

/// Get the ~/.garden/ directory path.
pub fn garden_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home_dir.join(".garden"))
}
