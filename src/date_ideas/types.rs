//! Date idea data structures.

use crate::board::BoardEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateCategory {
    #[default]
    Romantic,
    Adventure,
    Cozy,
    Creative,
    Outdoor,
    Foodie,
}

impl DateCategory {
    pub const ALL: [DateCategory; 6] = [
        DateCategory::Romantic,
        DateCategory::Adventure,
        DateCategory::Cozy,
        DateCategory::Creative,
        DateCategory::Outdoor,
        DateCategory::Foodie,
    ];

    pub fn emoji(&self) -> &'static str {
        match self {
            DateCategory::Romantic => "💕",
            DateCategory::Adventure => "🏞️",
            DateCategory::Cozy => "🏠",
            DateCategory::Creative => "🎨",
            DateCategory::Outdoor => "🌳",
            DateCategory::Foodie => "🍽️",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateCategory::Romantic => "Romantic",
            DateCategory::Adventure => "Adventure",
            DateCategory::Cozy => "Cozy",
            DateCategory::Creative => "Creative",
            DateCategory::Outdoor => "Outdoor",
            DateCategory::Foodie => "Foodie",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cost {
    Free,
    Low,
    #[default]
    Medium,
    High,
}

impl Cost {
    pub const ALL: [Cost; 4] = [Cost::Free, Cost::Low, Cost::Medium, Cost::High];

    pub fn label(&self) -> &'static str {
        match self {
            Cost::Free => "Free",
            Cost::Low => "$",
            Cost::Medium => "$$",
            Cost::High => "$$$",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BestTime {
    Morning,
    Afternoon,
    Evening,
    #[default]
    Anytime,
}

impl BestTime {
    pub const ALL: [BestTime; 4] = [
        BestTime::Morning,
        BestTime::Afternoon,
        BestTime::Evening,
        BestTime::Anytime,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BestTime::Morning => "Morning",
            BestTime::Afternoon => "Afternoon",
            BestTime::Evening => "Evening",
            BestTime::Anytime => "Anytime",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
    #[default]
    Anytime,
}

impl Season {
    pub const ALL: [Season; 5] = [
        Season::Spring,
        Season::Summer,
        Season::Fall,
        Season::Winter,
        Season::Anytime,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
            Season::Anytime => "Anytime",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateIdea {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: DateCategory,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub estimated_cost: Cost,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub best_time: BestTime,
    #[serde(default)]
    pub season: Season,
    pub created_by: String,
    pub created_by_avatar: String,
    pub timestamp: DateTime<Utc>,
    /// 0 (unrated) to 5 stars.
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub photos: Vec<String>,
}

impl BoardEntry for DateIdea {
    fn id(&self) -> &str {
        &self.id
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// What the user typed into the compose form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateIdeaDraft {
    pub title: String,
    pub description: String,
    pub category: DateCategory,
    pub location: String,
    pub estimated_cost: Cost,
    pub duration: String,
    pub best_time: BestTime,
    pub season: Season,
    pub notes: String,
}
