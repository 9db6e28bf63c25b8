//! UI rendering for the shared diary.

use super::common::{
    create_panel_layout, heart_label, render_empty, render_info_panel_frame, render_status_bar,
    ListCursor,
};
use super::compose::ComposeForm;
use chrono::{DateTime, Utc};
use garden::core::time_ago;
use garden::diary::{DiaryBook, DiaryDraft, DiaryMood, DiaryView};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
    Frame,
};

const TITLE: usize = 0;
const CONTENT: usize = 1;
const LOCATION: usize = 2;
const MOOD: usize = 3;
const TAGS: usize = 4;

pub fn diary_form(prefill: &str) -> ComposeForm {
    ComposeForm::new("📖 New Diary Entry")
        .text("Title", 80)
        .text_with("Entry", 2000, prefill)
        .text("Location", 80)
        .choice(
            "Mood",
            DiaryMood::ALL.iter().map(|m| format!("{} {}", m.emoji(), m.label())),
            0,
        )
        .text("Tags", 120)
}

pub fn diary_draft(form: &ComposeForm) -> DiaryDraft {
    DiaryDraft {
        title: form.value(TITLE).to_string(),
        content: form.value(CONTENT).to_string(),
        location: form.value(LOCATION).to_string(),
        mood: DiaryMood::ALL[form.selected(MOOD) % DiaryMood::ALL.len()],
        tags: form.value(TAGS).to_string(),
    }
}

pub fn render_diary(
    frame: &mut Frame,
    area: Rect,
    book: &DiaryBook,
    view: DiaryView,
    cursor: &ListCursor,
    now: DateTime<Utc>,
    accent: Color,
) {
    let title = format!(" 📖 Our Diary ({}) ", view.label());
    let layout = create_panel_layout(frame, area, &title, accent, 36);
    let visible = book.visible(view);

    if visible.is_empty() {
        render_empty(frame, layout.content, "No entries here yet. Press [N] to write one ✍️");
    } else {
        let items: Vec<ListItem> = visible
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let marker = if i == cursor.selected_index { "▶ " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::raw(marker),
                    Span::raw(format!("{} ", entry.mood.emoji())),
                    Span::styled(
                        entry.title.clone(),
                        Style::default().fg(accent).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!(
                            "  {} {}  {}  ",
                            entry.author_avatar,
                            entry.author,
                            time_ago(entry.timestamp, now)
                        ),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        heart_label(entry.loved, entry.hearts),
                        Style::default().fg(Color::LightRed),
                    ),
                ]))
            })
            .collect();
        frame.render_widget(List::new(items), layout.content);
    }

    render_status_bar(
        frame,
        layout.status_bar,
        &format!(
            "{} entries  💕 {} hearts",
            book.entries().len(),
            book.total_hearts()
        ),
        Color::White,
        &[
            ("[N]", "Write"),
            ("[P]", "Prompt"),
            ("[V]", "View"),
            ("[L]", "Love"),
            ("[Q]", "Quit"),
        ],
    );

    let inner = render_info_panel_frame(frame, layout.info_panel, " Entry ");
    let Some(entry) = cursor.pick(&visible) else {
        return;
    };
    let mut lines = vec![
        Line::from(Span::styled(
            entry.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} {}", entry.mood.emoji(), entry.mood.label()),
            Style::default().fg(accent),
        )),
    ];
    if let Some(location) = &entry.location {
        lines.push(Line::from(format!("📍 {}", location)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(entry.content.clone()));
    if !entry.tags.is_empty() {
        lines.push(Line::from(""));
        let tags: Vec<String> = entry.tags.iter().map(|t| format!("#{}", t)).collect();
        lines.push(Line::from(Span::styled(
            tags.join(" "),
            Style::default().fg(Color::Cyan),
        )));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
