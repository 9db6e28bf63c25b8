//! Pure date idea rules.

use super::types::{BestTime, Cost, DateCategory, DateIdea, DateIdeaDraft, Season};
use crate::core::constants::{GARDEN_BOT_AVATAR, GARDEN_BOT_NAME, MAX_DATE_RATING};
use crate::profile::UserProfile;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use std::io;
use uuid::Uuid;

/// Build an idea from a draft. Title and description are required.
pub fn create_idea(
    draft: &DateIdeaDraft,
    author: &UserProfile,
    now: DateTime<Utc>,
) -> io::Result<DateIdea> {
    let title = draft.title.trim();
    let description = draft.description.trim();
    if title.is_empty() || description.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "A date idea needs a title and a description",
        ));
    }

    Ok(DateIdea {
        id: Uuid::new_v4().to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: draft.category,
        location: draft.location.trim().to_string(),
        estimated_cost: draft.estimated_cost,
        duration: draft.duration.trim().to_string(),
        best_time: draft.best_time,
        season: draft.season,
        created_by: author.name.clone(),
        created_by_avatar: author.avatar.clone(),
        timestamp: now,
        rating: 0,
        notes: draft.notes.trim().to_string(),
        scheduled: None,
        completed: false,
        photos: Vec::new(),
    })
}

/// Starter ideas for a board that was never saved, one day apart.
pub fn sample_ideas(now: DateTime<Utc>) -> Vec<DateIdea> {
    let samples = [
        (
            "Stargazing Picnic",
            "Pack a cozy blanket, some snacks, and find a quiet spot to watch the stars together.",
            DateCategory::Romantic,
            "Local park or countryside",
            Cost::Low,
            "2-3 hours",
            BestTime::Evening,
            Season::Anytime,
        ),
        (
            "Cooking Challenge",
            "Pick a cuisine neither of you has tried cooking and attempt to make it together!",
            DateCategory::Creative,
            "Home kitchen",
            Cost::Medium,
            "2-4 hours",
            BestTime::Anytime,
            Season::Anytime,
        ),
        (
            "Sunrise Hike",
            "Wake up early and hike to a beautiful viewpoint to watch the sunrise together.",
            DateCategory::Adventure,
            "Local hiking trail",
            Cost::Free,
            "3-4 hours",
            BestTime::Morning,
            Season::Spring,
        ),
    ];

    samples
        .into_iter()
        .enumerate()
        .map(
            |(i, (title, description, category, location, cost, duration, best_time, season))| {
                DateIdea {
                    id: format!("sample-{}", i),
                    title: title.to_string(),
                    description: description.to_string(),
                    category,
                    location: location.to_string(),
                    estimated_cost: cost,
                    duration: duration.to_string(),
                    best_time,
                    season,
                    created_by: GARDEN_BOT_NAME.to_string(),
                    created_by_avatar: GARDEN_BOT_AVATAR.to_string(),
                    timestamp: now - Duration::days(i as i64),
                    rating: 0,
                    notes: String::new(),
                    scheduled: None,
                    completed: false,
                    photos: Vec::new(),
                }
            },
        )
        .collect()
}

/// Set the star rating, capped at 5. Zero clears it.
pub fn set_rating(idea: &mut DateIdea, stars: u8) {
    idea.rating = stars.min(MAX_DATE_RATING);
}

pub fn toggle_completed(idea: &mut DateIdea) {
    idea.completed = !idea.completed;
}

/// Parse a `YYYY-MM-DD` schedule date as midnight UTC.
pub fn parse_schedule_date(raw: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()?;
    Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?))
}

/// Ideas in `category`, or all of them for `None`.
pub fn filter_by_category(ideas: &[DateIdea], category: Option<DateCategory>) -> Vec<&DateIdea> {
    ideas
        .iter()
        .filter(|idea| category.map_or(true, |c| idea.category == c))
        .collect()
}

pub fn completed_count(ideas: &[DateIdea]) -> usize {
    ideas.iter().filter(|idea| idea.completed).count()
}

/// Mean rating over every idea, unrated ones counting as zero.
pub fn average_rating(ideas: &[DateIdea]) -> f64 {
    if ideas.is_empty() {
        return 0.0;
    }
    let total: u32 = ideas.iter().map(|idea| u32::from(idea.rating)).sum();
    f64::from(total) / ideas.len() as f64
}

/// Cycle the category filter: all, then each category in order.
pub fn next_category_filter(current: Option<DateCategory>) -> Option<DateCategory> {
    match current {
        None => Some(DateCategory::ALL[0]),
        Some(c) => DateCategory::ALL
            .iter()
            .position(|x| *x == c)
            .and_then(|i| DateCategory::ALL.get(i + 1).copied()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, description: &str) -> DateIdeaDraft {
        DateIdeaDraft {
            title: title.to_string(),
            description: description.to_string(),
            ..DateIdeaDraft::default()
        }
    }

    #[test]
    fn test_create_requires_title_and_description() {
        let ava = UserProfile::placeholder("Keychain");
        assert!(create_idea(&draft("Picnic", " "), &ava, Utc::now()).is_err());
        assert!(create_idea(&draft("", "Somewhere sunny"), &ava, Utc::now()).is_err());

        let idea = create_idea(&draft(" Picnic ", " Somewhere sunny "), &ava, Utc::now()).unwrap();
        assert_eq!(idea.title, "Picnic");
        assert_eq!(idea.category, DateCategory::Romantic);
        assert_eq!(idea.estimated_cost, Cost::Medium);
        assert_eq!(idea.best_time, BestTime::Anytime);
        assert_eq!(idea.rating, 0);
        assert!(!idea.completed);
        assert!(idea.scheduled.is_none());
    }

    #[test]
    fn test_samples_are_a_day_apart() {
        let now = Utc.with_ymd_and_hms(2024, 2, 14, 12, 0, 0).unwrap();
        let samples = sample_ideas(now);
        let ids: Vec<&str> = samples.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["sample-0", "sample-1", "sample-2"]);
        assert_eq!(samples[0].title, "Stargazing Picnic");
        assert_eq!(samples[2].season, Season::Spring);
        assert_eq!(samples[2].estimated_cost, Cost::Free);
        assert_eq!(samples[1].timestamp, now - Duration::days(1));
        assert!(samples.iter().all(|i| i.created_by == "Garden Bot"));
    }

    #[test]
    fn test_rating_is_capped() {
        let mut idea = sample_ideas(Utc::now()).remove(0);
        set_rating(&mut idea, 4);
        assert_eq!(idea.rating, 4);
        set_rating(&mut idea, 9);
        assert_eq!(idea.rating, 5);
        set_rating(&mut idea, 0);
        assert_eq!(idea.rating, 0);
    }

    #[test]
    fn test_stats_over_board() {
        let mut ideas = sample_ideas(Utc::now());
        assert_eq!(average_rating(&[]), 0.0);
        assert_eq!(average_rating(&ideas), 0.0);

        set_rating(&mut ideas[0], 5);
        set_rating(&mut ideas[1], 4);
        toggle_completed(&mut ideas[1]);
        assert!((average_rating(&ideas) - 3.0).abs() < 1e-9);
        assert_eq!(completed_count(&ideas), 1);

        assert_eq!(filter_by_category(&ideas, None).len(), 3);
        let creative = filter_by_category(&ideas, Some(DateCategory::Creative));
        assert_eq!(creative.len(), 1);
        assert_eq!(creative[0].title, "Cooking Challenge");
        assert!(filter_by_category(&ideas, Some(DateCategory::Foodie)).is_empty());
    }

    #[test]
    fn test_schedule_date_parsing() {
        let parsed = parse_schedule_date(" 2024-06-01 ").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
        assert!(parse_schedule_date("June 1st").is_none());
        assert!(parse_schedule_date("2024-02-30").is_none());
    }

    #[test]
    fn test_category_filter_cycles_back_to_all() {
        let mut filter = None;
        let mut seen = Vec::new();
        for _ in 0..7 {
            filter = next_category_filter(filter);
            seen.push(filter);
        }
        assert_eq!(seen[0], Some(DateCategory::Romantic));
        assert_eq!(seen[5], Some(DateCategory::Foodie));
        assert_eq!(seen[6], None);
    }
}
