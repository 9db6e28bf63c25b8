//! Garden configuration (`~/.garden/config.json`).

use crate::core::constants::{
    DEFAULT_PASSCODE, DEFAULT_PLAYFIELD_HEIGHT, DEFAULT_PLAYFIELD_WIDTH, FRAME_MS,
};
use crate::heart_hunt::Playfield;
use crate::profile::passcode_digest;
use crate::store::{load_json_or_default, KeyValueStore};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Key the config file lives under in the garden directory.
pub const CONFIG_KEY: &str = "config";

/// User-tunable settings. Every field falls back to its default when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GardenConfig {
    /// Where the store keeps its files (None = ~/.garden/).
    pub data_dir: Option<PathBuf>,

    /// Heart Hunt playfield width in playfield units.
    pub playfield_width: f64,

    /// Heart Hunt playfield height; elements past it are misses.
    pub playfield_height: f64,

    /// Shell redraw/input poll interval.
    pub frame_ms: u64,

    /// Hex SHA-256 of the garden passcode.
    pub passcode_sha256: String,
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            playfield_width: DEFAULT_PLAYFIELD_WIDTH,
            playfield_height: DEFAULT_PLAYFIELD_HEIGHT,
            frame_ms: FRAME_MS,
            passcode_sha256: passcode_digest(DEFAULT_PASSCODE),
        }
    }
}

impl GardenConfig {
    /// Load from `store`, substituting defaults for anything missing or invalid.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        load_json_or_default::<GardenConfig>(store, CONFIG_KEY).sanitized()
    }

    pub fn playfield(&self) -> Playfield {
        Playfield::new(self.playfield_width, self.playfield_height)
    }

    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.playfield_width.is_finite() && self.playfield_width > 0.0) {
            log::warn!(
                "Invalid playfield_width {}, using default",
                self.playfield_width
            );
            self.playfield_width = defaults.playfield_width;
        }
        if !(self.playfield_height.is_finite() && self.playfield_height > 0.0) {
            log::warn!(
                "Invalid playfield_height {}, using default",
                self.playfield_height
            );
            self.playfield_height = defaults.playfield_height;
        }
        if self.frame_ms == 0 {
            self.frame_ms = defaults.frame_ms;
        }
        self
    }
}
