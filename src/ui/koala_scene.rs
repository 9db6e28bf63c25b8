//! UI rendering for the Koala care panel.

use super::common::{
    create_panel_layout, render_info_panel_frame, render_stat_gauge, render_status_bar,
};
use chrono::{DateTime, Utc};
use garden::core::{time_ago, XP_PER_PET_LEVEL};
use garden::koala::{CareAction, KoalaSession, PetStat};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

/// Key hint for the action at `index` in [`CareAction::ALL`].
pub fn action_key(index: usize) -> char {
    char::from_digit(index as u32 + 1, 10).unwrap_or('?')
}

/// Map a pressed digit back onto an action.
pub fn action_for_key(c: char) -> Option<CareAction> {
    let index = c.to_digit(10)?.checked_sub(1)? as usize;
    CareAction::ALL.get(index).copied()
}

pub fn render_koala(
    frame: &mut Frame,
    area: Rect,
    session: &KoalaSession,
    now: DateTime<Utc>,
    accent: Color,
) {
    let layout = create_panel_layout(frame, area, " 🐨 Koala Care ", accent, 34);
    let stats = session.stats();
    let mood = session.mood();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Mood
            Constraint::Length(1),
            Constraint::Length(4), // Stat gauges
            Constraint::Length(1),
            Constraint::Length(1), // Experience
            Constraint::Length(1),
            Constraint::Min(4), // Actions
        ])
        .split(layout.content);

    let mood_lines = vec![
        Line::from(Span::styled(
            format!("{}  {}", mood.emoji(), stats.name),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            mood.description(&stats.name),
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(mood_lines).alignment(ratatui::layout::Alignment::Center),
        chunks[0],
    );

    let gauges = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 4])
        .split(chunks[2]);
    for (stat, row) in PetStat::ALL.into_iter().zip(gauges.iter()) {
        render_stat_gauge(frame, *row, stat.name(), stats.get(stat));
    }

    let needed = stats.level * XP_PER_PET_LEVEL;
    let xp = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan))
        .label(format!("Level {}  {}/{} XP", stats.level, stats.experience, needed))
        .ratio((stats.experience as f64 / needed.max(1) as f64).clamp(0.0, 1.0));
    frame.render_widget(xp, chunks[4]);

    let mut action_lines = Vec::new();
    for (i, action) in CareAction::ALL.iter().enumerate() {
        let remaining = session.cooldown_remaining_secs(*action, now);
        let (state, color) = if remaining > 0 {
            (format!("{}s", remaining), Color::DarkGray)
        } else {
            ("ready".to_string(), Color::Green)
        };
        action_lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", action_key(i)), Style::default().fg(Color::White)),
            Span::raw(format!("{} ", action.emoji())),
            Span::styled(format!("{:<16}", action.name()), Style::default().fg(color)),
            Span::styled(state, Style::default().fg(color)),
        ]));
        action_lines.push(Line::from(Span::styled(
            format!("     {}", action.description(&stats.name)),
            Style::default().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(Paragraph::new(action_lines), chunks[6]);

    render_status_bar(
        frame,
        layout.status_bar,
        &format!("Caring as {} {}", session.player().avatar, session.player().name),
        Color::White,
        &[("[1-4]", "Care"), ("[Tab]", "Switch panel"), ("[Q]", "Quit")],
    );

    render_activity_log(frame, layout.info_panel, session, now);
}

fn render_activity_log(frame: &mut Frame, area: Rect, session: &KoalaSession, now: DateTime<Utc>) {
    let inner = render_info_panel_frame(frame, area, " Recent Care ");
    if session.activities().is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No care activities yet",
                Style::default().fg(Color::DarkGray),
            )),
            inner,
        );
        return;
    }

    let lines: Vec<Line> = session
        .activities()
        .iter()
        .take(inner.height as usize / 2)
        .flat_map(|activity| {
            [
                Line::from(vec![
                    Span::raw(format!("{} ", activity.actor_avatar)),
                    Span::raw(activity.message.clone()),
                ]),
                Line::from(Span::styled(
                    format!("   {}", time_ago(activity.timestamp, now)),
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}
