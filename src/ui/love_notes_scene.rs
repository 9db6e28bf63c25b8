//! UI rendering for the love notes panel.

use super::common::{
    create_panel_layout, heart_label, render_empty, render_info_panel_frame, render_status_bar,
    ListCursor,
};
use super::compose::ComposeForm;
use chrono::{DateTime, Utc};
use garden::core::{time_ago, MAX_LOVE_NOTE_CHARS};
use garden::love_notes::{LoveNotesBoard, LOVE_PROMPTS};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn love_note_form(prefill: &str) -> ComposeForm {
    ComposeForm::new("💌 New Love Note").text_with("Message", MAX_LOVE_NOTE_CHARS, prefill)
}

pub fn render_love_notes(
    frame: &mut Frame,
    area: Rect,
    board: &LoveNotesBoard,
    cursor: &ListCursor,
    now: DateTime<Utc>,
    accent: Color,
) {
    let layout = create_panel_layout(frame, area, " 💌 Love Notes ", accent, 34);
    let notes = board.notes();

    if notes.is_empty() {
        render_empty(frame, layout.content, "No love notes yet. Press [N] to write one 💕");
    } else {
        let items: Vec<ListItem> = notes
            .iter()
            .enumerate()
            .map(|(i, note)| {
                let marker = if i == cursor.selected_index { "▶ " } else { "  " };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::raw(marker),
                        Span::raw(format!("{} ", note.author_avatar)),
                        Span::styled(
                            note.author.clone(),
                            Style::default().fg(accent).add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            format!("  {}  ", time_ago(note.timestamp, now)),
                            Style::default().fg(Color::DarkGray),
                        ),
                        Span::styled(
                            heart_label(note.loved, note.hearts),
                            Style::default().fg(Color::LightRed),
                        ),
                    ]),
                    Line::from(format!("    {}", note.text)),
                ])
            })
            .collect();
        frame.render_widget(List::new(items), layout.content);
    }

    render_status_bar(
        frame,
        layout.status_bar,
        &format!("{} notes", notes.len()),
        Color::White,
        &[
            ("[N]", "Write"),
            ("[P]", "Prompt"),
            ("[L]", "Love"),
            ("[↑/↓]", "Select"),
            ("[Q]", "Quit"),
        ],
    );

    let inner = render_info_panel_frame(frame, layout.info_panel, " Need inspiration? ");
    let lines: Vec<Line> = LOVE_PROMPTS
        .iter()
        .map(|prompt| {
            Line::from(Span::styled(
                format!("• {}", prompt),
                Style::default().fg(Color::Gray),
            ))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_prefills_form() {
        let form = love_note_form(LOVE_PROMPTS[1]);
        assert_eq!(form.value(0), "I love how you...");
    }
}
