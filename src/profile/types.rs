//! User profiles.

use crate::core::constants::{FIRST_USER_ID, SECOND_USER_ID};
use serde::{Deserialize, Serialize};

/// Colour theme a user picked for their garden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// "Mystical": deep purples.
    Dark,
    /// "Keychain": laurel green and baby pink.
    #[default]
    Immy,
    /// "Bug": wood brown and nature greens.
    Light,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Dark, Theme::Immy, Theme::Light];

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Dark => "Mystical",
            Theme::Immy => "Keychain",
            Theme::Light => "Bug",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Theme::Dark => "🌙",
            Theme::Immy => "🐰",
            Theme::Light => "🐨",
        }
    }

    /// Next theme in the toggle cycle (dark → immy → light → dark).
    pub fn next(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Immy,
            Theme::Immy => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Avatars offered at registration.
pub const AVATARS: [&str; 8] = ["🐰", "🐨", "🦋", "🌸", "🦊", "🐻", "🌙", "⭐"];

/// One of the two garden users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Slot id: "Keychain" or "Bug".
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub theme: Theme,
    pub email: String,
}

impl UserProfile {
    /// Stand-in for a partner who has not registered yet.
    pub fn placeholder(id: &str) -> Self {
        let (avatar, theme) = if id == FIRST_USER_ID {
            ("🐰", Theme::Immy)
        } else {
            ("🐨", Theme::Light)
        };
        Self {
            id: id.to_string(),
            name: id.to_string(),
            avatar: avatar.to_string(),
            theme,
            email: String::new(),
        }
    }
}

/// The other slot's id.
pub fn partner_id(id: &str) -> &'static str {
    if id == FIRST_USER_ID {
        SECOND_USER_ID
    } else {
        FIRST_USER_ID
    }
}
