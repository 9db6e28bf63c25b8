//! Signed-in garden state and its key handling.

use crate::ui::common::{theme_accent, ListCursor};
use crate::ui::compose::{ComposeForm, FormKey};
use crate::ui::date_ideas_scene::{
    date_idea_draft, date_idea_form, rating_for_key, render_date_ideas, schedule_form,
};
use crate::ui::diary_scene::{diary_draft, diary_form, render_diary};
use crate::ui::heart_hunt_scene::{render_heart_hunt, target_for_key};
use crate::ui::inbox_scene::render_inbox;
use crate::ui::koala_scene::{action_for_key, render_koala};
use crate::ui::love_notes_scene::{love_note_form, render_love_notes};
use crate::ui::playlist_scene::{render_playlist, song_draft, song_form};
use crate::ui::{render_header, split_garden, Tab};
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use garden::config::GardenConfig;
use garden::date_ideas::{
    next_category_filter, parse_schedule_date, DateCategory, DateIdeasBoard,
};
use garden::diary::{DiaryBook, DiaryView, DIARY_PROMPTS};
use garden::heart_hunt::{GameOverSummary, GamePhase, HeartHuntEvent, HeartHuntSession};
use garden::koala::KoalaSession;
use garden::love_notes::{LoveNotesBoard, LOVE_PROMPTS};
use garden::notifications::{GardenNotification, NotificationBus, NotificationInbox};
use garden::playlist::Playlist;
use garden::profile::{cycle_theme, partner_of, UserProfile};
use garden::store::KeyValueStore;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use ratatui::Frame;
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::broadcast;

const TOAST_DURATION: Duration = Duration::from_millis(1500);

/// Which form is open over the current panel.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Compose {
    LoveNote,
    DiaryEntry,
    DateIdea,
    Schedule(String),
    Song,
}

/// What the main loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GardenAction {
    Continue,
    SignOut,
    Quit,
}

pub struct GardenApp {
    store: Arc<dyn KeyValueStore>,
    user: UserProfile,
    partner: UserProfile,
    tab: Tab,
    heart_hunt: HeartHuntSession,
    koala: KoalaSession,
    love_notes: LoveNotesBoard,
    notes_cursor: ListCursor,
    diary: DiaryBook,
    diary_view: DiaryView,
    diary_cursor: ListCursor,
    date_ideas: DateIdeasBoard,
    date_filter: Option<DateCategory>,
    ideas_cursor: ListCursor,
    playlist: Playlist,
    songs_cursor: ListCursor,
    compose: Option<(Compose, ComposeForm)>,
    inbox: NotificationInbox,
    inbox_cursor: ListCursor,
    notifications: broadcast::Receiver<GardenNotification>,
    last_summary: Option<GameOverSummary>,
    toast: Option<(String, Instant)>,
    rng: StdRng,
}

impl GardenApp {
    pub fn new(store: Arc<dyn KeyValueStore>, config: &GardenConfig, user: UserProfile) -> Self {
        let bus = NotificationBus::new();
        let notifications = bus.subscribe();
        let partner = partner_of(store.as_ref(), &user);
        let heart_hunt =
            HeartHuntSession::new(store.clone(), bus.clone(), user.clone(), config.playfield());
        let koala = KoalaSession::new(store.clone(), bus.clone(), user.clone(), Utc::now());
        let love_notes = LoveNotesBoard::new(store.clone(), bus.clone(), user.clone());
        let diary = DiaryBook::new(store.clone(), bus.clone(), user.clone());
        let date_ideas = DateIdeasBoard::new(store.clone(), bus.clone(), user.clone(), Utc::now());
        let playlist = Playlist::new(store.clone(), bus, user.clone());
        let inbox = NotificationInbox::load(store.clone());

        log::info!("{} entered the garden", user.name);
        Self {
            store,
            user,
            partner,
            tab: Tab::HeartHunt,
            heart_hunt,
            koala,
            love_notes,
            notes_cursor: ListCursor::new(),
            diary,
            diary_view: DiaryView::default(),
            diary_cursor: ListCursor::new(),
            date_ideas,
            date_filter: None,
            ideas_cursor: ListCursor::new(),
            playlist,
            songs_cursor: ListCursor::new(),
            compose: None,
            inbox,
            inbox_cursor: ListCursor::new(),
            notifications,
            last_summary: None,
            toast: None,
            rng: StdRng::from_entropy(),
        }
    }

    /// Advance every running process by `elapsed_ms` of wall time.
    pub fn tick(&mut self, elapsed_ms: u64) {
        let events = self.heart_hunt.update(elapsed_ms, &mut self.rng);
        for event in events {
            self.on_heart_hunt_event(event);
        }
        self.koala.update(elapsed_ms);
        self.inbox.drain(&mut self.notifications, Utc::now());
        self.inbox_cursor.clamp(self.inbox.entries().len());
        self.notes_cursor.clamp(self.love_notes.notes().len());
        self.diary_cursor.clamp(self.diary.visible(self.diary_view).len());
        self.ideas_cursor.clamp(self.date_ideas.filtered(self.date_filter).len());
        self.songs_cursor.clamp(self.playlist.songs().len());

        if let Some((_, shown_at)) = &self.toast {
            if shown_at.elapsed() >= TOAST_DURATION {
                self.toast = None;
            }
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        let accent = theme_accent(self.user.theme);
        let (header, body) = split_garden(frame.size());
        render_header(
            frame,
            header,
            self.tab,
            &self.user,
            &self.partner,
            self.inbox.unread_count(),
            self.toast.as_ref().map(|(text, _)| text.as_str()),
            accent,
        );

        let now = Utc::now();
        match self.tab {
            Tab::HeartHunt => render_heart_hunt(
                frame,
                body,
                self.heart_hunt.game(),
                self.last_summary.as_ref(),
                accent,
            ),
            Tab::Koala => render_koala(frame, body, &self.koala, now, accent),
            Tab::LoveNotes => {
                render_love_notes(frame, body, &self.love_notes, &self.notes_cursor, now, accent)
            }
            Tab::Diary => render_diary(
                frame,
                body,
                &self.diary,
                self.diary_view,
                &self.diary_cursor,
                now,
                accent,
            ),
            Tab::DateIdeas => render_date_ideas(
                frame,
                body,
                &self.date_ideas,
                self.date_filter,
                &self.ideas_cursor,
                now,
                accent,
            ),
            Tab::Playlist => {
                render_playlist(frame, body, &self.playlist, &self.songs_cursor, now, accent)
            }
            Tab::Inbox => render_inbox(frame, body, &self.inbox, &self.inbox_cursor, now, accent),
        }

        if let Some((_, form)) = &self.compose {
            form.draw(frame, body, accent);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> GardenAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.leave();
            return GardenAction::Quit;
        }

        if self.compose.is_some() {
            self.handle_compose_key(key.code);
            return GardenAction::Continue;
        }

        match key.code {
            KeyCode::Tab => {
                self.switch_tab(self.tab.next());
                return GardenAction::Continue;
            }
            KeyCode::BackTab => {
                self.switch_tab(self.tab.prev());
                return GardenAction::Continue;
            }
            KeyCode::F(2) => {
                if let Err(e) = cycle_theme(self.store.as_ref(), &mut self.user) {
                    log::warn!("Could not save theme: {}", e);
                }
                return GardenAction::Continue;
            }
            KeyCode::F(3) => {
                self.leave();
                return GardenAction::SignOut;
            }
            _ => {}
        }

        match self.tab {
            Tab::HeartHunt => self.handle_heart_hunt_key(key.code),
            Tab::Koala => self.handle_koala_key(key.code),
            Tab::LoveNotes => self.handle_love_notes_key(key.code),
            Tab::Diary => self.handle_diary_key(key.code),
            Tab::DateIdeas => self.handle_date_ideas_key(key.code),
            Tab::Playlist => self.handle_playlist_key(key.code),
            Tab::Inbox => self.handle_inbox_key(key.code),
        }
    }

    /// Finish a running hunt and stop decay before the garden closes.
    pub fn leave(&mut self) {
        for event in self.heart_hunt.end() {
            self.on_heart_hunt_event(event);
        }
        self.koala.deactivate();
    }

    fn switch_tab(&mut self, tab: Tab) {
        if self.tab == Tab::HeartHunt {
            self.heart_hunt.pause();
        }
        if self.tab == Tab::Koala {
            self.koala.deactivate();
        }
        self.tab = tab;
        if tab == Tab::Koala {
            self.koala.activate();
        }
    }

    fn handle_heart_hunt_key(&mut self, code: KeyCode) -> GardenAction {
        match (self.heart_hunt.game().phase, code) {
            (GamePhase::Playing, KeyCode::Char(' ')) => {
                self.heart_hunt.pause();
            }
            (GamePhase::Playing, KeyCode::Char(c)) if c.is_ascii_alphabetic() => {
                if let Some(id) = target_for_key(self.heart_hunt.game(), c) {
                    for event in self.heart_hunt.collect(id) {
                        self.on_heart_hunt_event(event);
                    }
                }
            }
            (GamePhase::Paused, KeyCode::Char(' ')) => {
                self.heart_hunt.resume();
            }
            (GamePhase::Playing | GamePhase::Paused, KeyCode::Esc) => {
                for event in self.heart_hunt.end() {
                    self.on_heart_hunt_event(event);
                }
            }
            (GamePhase::Idle | GamePhase::Ended, KeyCode::Enter) => {
                self.last_summary = None;
                self.heart_hunt.start();
            }
            (GamePhase::Ended, KeyCode::Char('d') | KeyCode::Char('D')) => {
                self.last_summary = None;
                self.heart_hunt.dismiss();
            }
            (GamePhase::Idle | GamePhase::Ended, KeyCode::Char('q') | KeyCode::Char('Q')) => {
                self.leave();
                return GardenAction::Quit;
            }
            _ => {}
        }
        GardenAction::Continue
    }

    fn handle_koala_key(&mut self, code: KeyCode) -> GardenAction {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.leave();
                return GardenAction::Quit;
            }
            KeyCode::Char(c) => {
                if let Some(action) = action_for_key(c) {
                    if let Some(outcome) = self.koala.perform(action, Utc::now()) {
                        let text = if outcome.leveled_up {
                            format!(
                                "{} {} reached level {}!",
                                action.emoji(),
                                self.koala.stats().name,
                                self.koala.stats().level
                            )
                        } else {
                            format!("{} {}", action.emoji(), outcome.record.message)
                        };
                        self.show_toast(text);
                    }
                }
            }
            _ => {}
        }
        GardenAction::Continue
    }

    fn handle_inbox_key(&mut self, code: KeyCode) -> GardenAction {
        match code {
            KeyCode::Up => self.inbox_cursor.move_up(),
            KeyCode::Down => self.inbox_cursor.move_down(self.inbox.entries().len()),
            KeyCode::Enter => {
                let selected = self.inbox_cursor.pick(self.inbox.entries());
                if let Some(id) = selected.map(|e| e.id.clone()) {
                    self.inbox.mark_read(&id);
                }
            }
            KeyCode::Char('a') | KeyCode::Char('A') => self.inbox.mark_all_read(),
            KeyCode::Char('c') | KeyCode::Char('C') => {
                self.inbox.clear();
                self.inbox_cursor.clamp(0);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.leave();
                return GardenAction::Quit;
            }
            _ => {}
        }
        GardenAction::Continue
    }

    fn handle_love_notes_key(&mut self, code: KeyCode) -> GardenAction {
        let len = self.love_notes.notes().len();
        match code {
            KeyCode::Up => self.notes_cursor.move_up(),
            KeyCode::Down => self.notes_cursor.move_down(len),
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.open_form(Compose::LoveNote, love_note_form(""));
            }
            KeyCode::Char('p') | KeyCode::Char('P') => {
                let prompt = LOVE_PROMPTS.choose(&mut self.rng).copied().unwrap_or("");
                self.open_form(Compose::LoveNote, love_note_form(prompt));
            }
            KeyCode::Char('l') | KeyCode::Char('L') => {
                let selected = self.notes_cursor.pick(self.love_notes.notes());
                if let Some(id) = selected.map(|n| n.id.clone()) {
                    self.love_notes.toggle_love(&id);
                }
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.leave();
                return GardenAction::Quit;
            }
            _ => {}
        }
        GardenAction::Continue
    }

    fn handle_diary_key(&mut self, code: KeyCode) -> GardenAction {
        let selected = self
            .diary_cursor
            .pick(&self.diary.visible(self.diary_view))
            .map(|e| e.id.clone());
        match code {
            KeyCode::Up => self.diary_cursor.move_up(),
            KeyCode::Down => self
                .diary_cursor
                .move_down(self.diary.visible(self.diary_view).len()),
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.open_form(Compose::DiaryEntry, diary_form(""));
            }
            KeyCode::Char('p') | KeyCode::Char('P') => {
                let prompt = DIARY_PROMPTS.choose(&mut self.rng).copied().unwrap_or("");
                self.open_form(Compose::DiaryEntry, diary_form(prompt));
            }
            KeyCode::Char('v') | KeyCode::Char('V') => {
                self.diary_view = self.diary_view.next();
                self.diary_cursor = ListCursor::new();
            }
            KeyCode::Char('l') | KeyCode::Char('L') => {
                if let Some(id) = selected {
                    self.diary.toggle_love(&id);
                }
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.leave();
                return GardenAction::Quit;
            }
            _ => {}
        }
        GardenAction::Continue
    }

    fn handle_date_ideas_key(&mut self, code: KeyCode) -> GardenAction {
        let selected = self
            .ideas_cursor
            .pick(&self.date_ideas.filtered(self.date_filter))
            .map(|idea| (idea.id.clone(), idea.title.clone()));
        match code {
            KeyCode::Up => self.ideas_cursor.move_up(),
            KeyCode::Down => self
                .ideas_cursor
                .move_down(self.date_ideas.filtered(self.date_filter).len()),
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.open_form(Compose::DateIdea, date_idea_form());
            }
            KeyCode::Char('f') | KeyCode::Char('F') => {
                self.date_filter = next_category_filter(self.date_filter);
                self.ideas_cursor = ListCursor::new();
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.leave();
                return GardenAction::Quit;
            }
            KeyCode::Char(c) => {
                let Some((id, title)) = selected else {
                    return GardenAction::Continue;
                };
                match c {
                    'c' | 'C' => {
                        self.date_ideas.toggle_completed(&id);
                    }
                    's' | 'S' => self.open_form(Compose::Schedule(id), schedule_form(&title)),
                    'e' | 'E' => {
                        let text = if self.date_ideas.share(&id) {
                            format!("💌 Shared \"{}\" with {}", title, self.partner.name)
                        } else {
                            format!("{} hasn't joined the garden yet", self.partner.name)
                        };
                        self.show_toast(text);
                    }
                    _ => {
                        if let Some(stars) = rating_for_key(c) {
                            self.date_ideas.rate(&id, stars);
                        }
                    }
                }
            }
            _ => {}
        }
        GardenAction::Continue
    }

    fn handle_playlist_key(&mut self, code: KeyCode) -> GardenAction {
        match code {
            KeyCode::Up => self.songs_cursor.move_up(),
            KeyCode::Down => self.songs_cursor.move_down(self.playlist.songs().len()),
            KeyCode::Char('n') | KeyCode::Char('N') => self.open_form(Compose::Song, song_form()),
            KeyCode::Char('l') | KeyCode::Char('L') => {
                let selected = self.songs_cursor.pick(self.playlist.songs());
                if let Some(id) = selected.map(|s| s.id.clone()) {
                    self.playlist.toggle_love(&id);
                }
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.leave();
                return GardenAction::Quit;
            }
            _ => {}
        }
        GardenAction::Continue
    }

    fn open_form(&mut self, kind: Compose, form: ComposeForm) {
        self.compose = Some((kind, form));
    }

    fn handle_compose_key(&mut self, code: KeyCode) {
        let Some((_, form)) = self.compose.as_mut() else {
            return;
        };
        match form.handle_key(code) {
            FormKey::Editing => {}
            FormKey::Cancel => self.compose = None,
            FormKey::Submit => self.submit_compose(),
        }
    }

    /// Save the open form. It stays open with the reason if rejected.
    fn submit_compose(&mut self) {
        let Some((kind, form)) = self.compose.take() else {
            return;
        };
        let now = Utc::now();
        let result = match &kind {
            Compose::LoveNote => self
                .love_notes
                .send(form.value(0), now)
                .map(|_| "💌 Love note sent".to_string()),
            Compose::DiaryEntry => self
                .diary
                .write(&diary_draft(&form), now)
                .map(|entry| format!("📖 \"{}\" added to the diary", entry.title)),
            Compose::DateIdea => self
                .date_ideas
                .create(&date_idea_draft(&form), now)
                .map(|idea| format!("💡 \"{}\" added to date ideas", idea.title)),
            Compose::Schedule(id) => match parse_schedule_date(form.value(0)) {
                Some(when) => {
                    self.date_ideas.schedule(id, when);
                    Ok(format!("📅 Scheduled for {}", when.format("%Y-%m-%d")))
                }
                None => Err(io::Error::new(io::ErrorKind::InvalidInput, "Use YYYY-MM-DD")),
            },
            Compose::Song => self
                .playlist
                .add(&song_draft(&form), now)
                .map(|song| format!("🎵 \"{}\" added to Us", song.title)),
        };

        match result {
            Ok(text) => {
                match kind {
                    Compose::LoveNote => self.notes_cursor = ListCursor::new(),
                    Compose::DiaryEntry => self.diary_cursor = ListCursor::new(),
                    Compose::DateIdea => self.ideas_cursor = ListCursor::new(),
                    Compose::Song => self.songs_cursor = ListCursor::new(),
                    Compose::Schedule(_) => {}
                }
                self.show_toast(text);
            }
            Err(e) => {
                let mut form = form;
                form.validation_error = Some(e.to_string());
                self.compose = Some((kind, form));
            }
        }
    }

    fn on_heart_hunt_event(&mut self, event: HeartHuntEvent) {
        match event {
            HeartHuntEvent::BombHit { .. } => self.show_toast("💣 BOMB! -20".to_string()),
            HeartHuntEvent::ComboBonus { streak, bonus } => {
                self.show_toast(format!("🔥 {}x COMBO! +{}", streak, bonus))
            }
            HeartHuntEvent::LevelUp { level } => {
                self.show_toast(format!("⭐ LEVEL UP! Level {}", level))
            }
            HeartHuntEvent::ElementMissed { kind, .. } => {
                self.show_toast(format!("💔 Missed a {}", kind.name()))
            }
            HeartHuntEvent::GameOver(summary) => {
                self.last_summary = Some(summary);
            }
            HeartHuntEvent::ElementSpawned { .. } | HeartHuntEvent::Collected { .. } => {}
        }
    }

    fn show_toast(&mut self, text: String) {
        self.toast = Some((text, Instant::now()));
    }
}
