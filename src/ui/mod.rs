pub mod common;
pub mod compose;
pub mod date_ideas_scene;
pub mod diary_scene;
pub mod heart_hunt_scene;
pub mod inbox_scene;
pub mod koala_scene;
pub mod love_notes_scene;
pub mod passcode_screen;
pub mod playlist_scene;
pub mod profile_screens;

use garden::profile::UserProfile;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Panels of the garden screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    HeartHunt,
    Koala,
    LoveNotes,
    Diary,
    DateIdeas,
    Playlist,
    Inbox,
}

impl Tab {
    pub const ALL: [Tab; 7] = [
        Tab::HeartHunt,
        Tab::Koala,
        Tab::LoveNotes,
        Tab::Diary,
        Tab::DateIdeas,
        Tab::Playlist,
        Tab::Inbox,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::HeartHunt => "💖 Hunt",
            Tab::Koala => "🐨 Koala",
            Tab::LoveNotes => "💌 Notes",
            Tab::Diary => "📖 Diary",
            Tab::DateIdeas => "💡 Dates",
            Tab::Playlist => "🎵 Us",
            Tab::Inbox => "🔔 Inbox",
        }
    }

    fn index(&self) -> usize {
        Tab::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(&self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// Split the screen into a 2-line header and the panel body.
pub fn split_garden(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(8)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Tabs, who is signed in, and the latest toast.
#[allow(clippy::too_many_arguments)]
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    active: Tab,
    user: &UserProfile,
    partner: &UserProfile,
    unread: usize,
    toast: Option<&str>,
    accent: Color,
) {
    let mut tabs = vec![Span::styled(
        "🌸 Garden  ",
        Style::default().fg(accent).add_modifier(Modifier::BOLD),
    )];
    for tab in Tab::ALL {
        let label = if tab == Tab::Inbox && unread > 0 {
            format!(" {} ({}) ", tab.title(), unread)
        } else {
            format!(" {} ", tab.title())
        };
        let style = if tab == active {
            Style::default()
                .fg(Color::Black)
                .bg(accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        tabs.push(Span::styled(label, style));
        tabs.push(Span::raw(" "));
    }

    let who = Line::from(vec![
        Span::raw(format!("{} {}", user.avatar, user.name)),
        Span::styled(" 💕 ", Style::default().fg(Color::LightRed)),
        Span::raw(format!("{} {}", partner.avatar, partner.name)),
        Span::styled(
            format!("   {} {}", user.theme.emoji(), user.theme.name()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(60), Constraint::Length(40)])
        .split(rows[0]);

    frame.render_widget(Paragraph::new(Line::from(tabs)), top[0]);
    frame.render_widget(Paragraph::new(who).alignment(Alignment::Right), top[1]);

    let hints = match toast {
        Some(text) => Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled(
            "[Tab] Panels  [F2] Theme  [F3] Sign out",
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(hints).alignment(Alignment::Center), rows[1]);
}
