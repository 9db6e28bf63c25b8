//! UI rendering for the notification inbox.

use super::common::{create_panel_layout, render_info_panel_frame, render_status_bar, ListCursor};
use chrono::{DateTime, Utc};
use garden::core::time_ago;
use garden::notifications::{NotificationInbox, NotificationKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

fn kind_color(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Affirmation => Color::LightMagenta,
        NotificationKind::Diary => Color::Magenta,
        NotificationKind::Date => Color::Yellow,
        NotificationKind::Heart => Color::LightRed,
        NotificationKind::Koala => Color::Green,
        NotificationKind::Music => Color::Blue,
    }
}

pub fn render_inbox(
    frame: &mut Frame,
    area: Rect,
    inbox: &NotificationInbox,
    cursor: &ListCursor,
    now: DateTime<Utc>,
    accent: Color,
) {
    let title = match inbox.unread_count() {
        0 => " 🔔 Inbox ".to_string(),
        n => format!(" 🔔 Inbox ({} new) ", n),
    };
    let layout = create_panel_layout(frame, area, &title, accent, 30);

    if inbox.entries().is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No notifications yet 💕",
                Style::default().fg(Color::DarkGray),
            )),
            layout.content,
        );
    } else {
        let items: Vec<ListItem> = inbox
            .entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let marker = if i == cursor.selected_index { "▶" } else { " " };
                let dot = if entry.read { "  " } else { "● " };
                let title_style = if entry.read {
                    Style::default().fg(Color::Gray)
                } else {
                    Style::default()
                        .fg(kind_color(entry.kind))
                        .add_modifier(Modifier::BOLD)
                };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::raw(format!("{} ", marker)),
                        Span::styled(dot, Style::default().fg(Color::LightRed)),
                        Span::raw(format!("{} ", entry.kind.icon())),
                        Span::styled(entry.title.clone(), title_style),
                        Span::styled(
                            format!("  {}", time_ago(entry.timestamp, now)),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]),
                    Line::from(Span::styled(
                        format!("      {}", entry.message),
                        Style::default().fg(Color::White),
                    )),
                ])
            })
            .collect();
        frame.render_widget(List::new(items), layout.content);
    }

    render_status_bar(
        frame,
        layout.status_bar,
        &format!("{} unread", inbox.unread_count()),
        Color::White,
        &[
            ("[↑/↓]", "Select"),
            ("[Enter]", "Mark read"),
            ("[A]", "All read"),
            ("[C]", "Clear"),
            ("[Q]", "Quit"),
        ],
    );

    let inner = render_info_panel_frame(frame, layout.info_panel, " Details ");
    if let Some(entry) = cursor.pick(inbox.entries()) {
        let lines = vec![
            Line::from(Span::styled(
                format!("{} {}", entry.kind.icon(), entry.kind.name()),
                Style::default().fg(kind_color(entry.kind)),
            )),
            Line::from(""),
            Line::from(Span::styled(
                entry.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(entry.message.clone()),
            Line::from(""),
            Line::from(Span::styled(
                format!("From {}", entry.from),
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                entry.timestamp.format("%Y-%m-%d %H:%M").to_string(),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines).wrap(ratatui::widgets::Wrap { trim: true }),
            inner,
        );
    }
}
