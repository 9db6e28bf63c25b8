//! Date ideas bound to a store, a bus and the signed-in user.

use super::logic::{
    average_rating, completed_count, create_idea, filter_by_category, sample_ideas, set_rating,
    toggle_completed,
};
use super::types::{DateCategory, DateIdea, DateIdeaDraft};
use crate::board::Board;
use crate::core::constants::DATE_IDEAS_KEY;
use crate::notifications::{NotificationBus, NotificationKind};
use crate::profile::UserProfile;
use crate::store::KeyValueStore;
use chrono::{DateTime, Utc};
use std::io;
use std::sync::Arc;

pub struct DateIdeasBoard {
    board: Board<DateIdea>,
}

impl DateIdeasBoard {
    /// Open the board; a garden that never saved ideas gets the samples.
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        bus: NotificationBus,
        user: UserProfile,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            board: Board::open_or_seed(store, bus, user, DATE_IDEAS_KEY, || sample_ideas(now)),
        }
    }

    pub fn ideas(&self) -> &[DateIdea] {
        self.board.entries()
    }

    pub fn filtered(&self, category: Option<DateCategory>) -> Vec<&DateIdea> {
        filter_by_category(self.board.entries(), category)
    }

    pub fn completed_count(&self) -> usize {
        completed_count(self.board.entries())
    }

    pub fn average_rating(&self) -> f64 {
        average_rating(self.board.entries())
    }

    pub fn create(&mut self, draft: &DateIdeaDraft, now: DateTime<Utc>) -> io::Result<&DateIdea> {
        let idea = create_idea(draft, self.board.author(), now)?;
        self.board.notify(
            NotificationKind::Date,
            "New Date Idea",
            format!("{} created a new date idea: \"{}\"", idea.created_by, idea.title),
        );
        Ok(self.board.add(idea))
    }

    pub fn rate(&mut self, id: &str, stars: u8) -> bool {
        self.board.modify(id, |idea| set_rating(idea, stars))
    }

    pub fn toggle_completed(&mut self, id: &str) -> bool {
        self.board.modify(id, toggle_completed)
    }

    pub fn schedule(&mut self, id: &str, when: DateTime<Utc>) -> bool {
        self.board.modify(id, |idea| idea.scheduled = Some(when))
    }

    /// Pass an idea on to the partner. False if the idea is unknown or
    /// nobody is there to receive it.
    pub fn share(&self, id: &str) -> bool {
        let Some(idea) = self.board.get(id) else {
            return false;
        };
        self.board.notify(
            NotificationKind::Date,
            "Date Idea Shared",
            format!("{} shared \"{}\"", self.board.author().name, idea.title),
        )
    }
}
