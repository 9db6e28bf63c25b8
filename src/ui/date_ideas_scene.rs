//! UI rendering for the date ideas board.

use super::common::{
    create_panel_layout, render_empty, render_info_panel_frame, render_status_bar, ListCursor,
};
use super::compose::ComposeForm;
use chrono::{DateTime, Utc};
use garden::core::{time_ago, MAX_DATE_RATING};
use garden::date_ideas::{BestTime, Cost, DateCategory, DateIdeaDraft, DateIdeasBoard, Season};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
    Frame,
};

const TITLE: usize = 0;
const DESCRIPTION: usize = 1;
const CATEGORY: usize = 2;
const LOCATION: usize = 3;
const COST: usize = 4;
const DURATION: usize = 5;
const BEST_TIME: usize = 6;
const SEASON: usize = 7;
const NOTES: usize = 8;

pub fn date_idea_form() -> ComposeForm {
    ComposeForm::new("💡 New Date Idea")
        .text("Title", 80)
        .text("Description", 500)
        .choice(
            "Category",
            DateCategory::ALL.iter().map(|c| format!("{} {}", c.emoji(), c.label())),
            0,
        )
        .text("Location", 80)
        .choice("Cost", Cost::ALL.iter().map(|c| c.label()), 2)
        .text("Duration", 40)
        .choice("Best time", BestTime::ALL.iter().map(|t| t.label()), 3)
        .choice("Season", Season::ALL.iter().map(|s| s.label()), 4)
        .text("Notes", 300)
}

pub fn date_idea_draft(form: &ComposeForm) -> DateIdeaDraft {
    let pick = |all_len: usize, field: usize| form.selected(field) % all_len;
    DateIdeaDraft {
        title: form.value(TITLE).to_string(),
        description: form.value(DESCRIPTION).to_string(),
        category: DateCategory::ALL[pick(DateCategory::ALL.len(), CATEGORY)],
        location: form.value(LOCATION).to_string(),
        estimated_cost: Cost::ALL[pick(Cost::ALL.len(), COST)],
        duration: form.value(DURATION).to_string(),
        best_time: BestTime::ALL[pick(BestTime::ALL.len(), BEST_TIME)],
        season: Season::ALL[pick(Season::ALL.len(), SEASON)],
        notes: form.value(NOTES).to_string(),
    }
}

pub fn schedule_form(title: &str) -> ComposeForm {
    ComposeForm::new(format!("📅 Schedule \"{}\"", title)).text("Date", 10)
}

/// "⭐⭐⭐☆☆"
pub fn stars(rating: u8) -> String {
    (1..=MAX_DATE_RATING)
        .map(|star| if star <= rating { "⭐" } else { "☆" })
        .collect()
}

/// Map a pressed digit onto a star rating.
pub fn rating_for_key(c: char) -> Option<u8> {
    let stars = c.to_digit(10)? as u8;
    (stars <= MAX_DATE_RATING).then_some(stars)
}

pub fn render_date_ideas(
    frame: &mut Frame,
    area: Rect,
    board: &DateIdeasBoard,
    filter: Option<DateCategory>,
    cursor: &ListCursor,
    now: DateTime<Utc>,
    accent: Color,
) {
    let title = match filter {
        Some(category) => format!(" 💡 Date Ideas ({} {}) ", category.emoji(), category.label()),
        None => " 💡 Date Ideas ".to_string(),
    };
    let layout = create_panel_layout(frame, area, &title, accent, 38);
    let ideas = board.filtered(filter);

    if ideas.is_empty() {
        render_empty(frame, layout.content, "No ideas in this category yet 💭");
    } else {
        let items: Vec<ListItem> = ideas
            .iter()
            .enumerate()
            .map(|(i, idea)| {
                let marker = if i == cursor.selected_index { "▶ " } else { "  " };
                let title_style = if idea.completed {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default().fg(accent).add_modifier(Modifier::BOLD)
                };
                ListItem::new(Line::from(vec![
                    Span::raw(marker),
                    Span::raw(format!("{} ", idea.category.emoji())),
                    Span::styled(idea.title.clone(), title_style),
                    Span::raw(format!("  {}", stars(idea.rating))),
                    Span::styled(
                        if idea.completed { "  ✓ done" } else { "" },
                        Style::default().fg(Color::Green),
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
            "{} ideas  ✓ {} completed  ⭐ {:.1} avg rating",
            board.ideas().len(),
            board.completed_count(),
            board.average_rating()
        ),
        Color::White,
        &[
            ("[N]", "New"),
            ("[0-5]", "Rate"),
            ("[C]", "Done"),
            ("[S]", "Schedule"),
            ("[E]", "Share"),
            ("[F]", "Filter"),
        ],
    );

    let inner = render_info_panel_frame(frame, layout.info_panel, " Details ");
    let Some(idea) = cursor.pick(&ideas) else {
        return;
    };
    let dim = Style::default().fg(Color::Gray);
    let mut lines = vec![
        Line::from(Span::styled(
            idea.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(idea.description.clone()),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "📍 {}",
                if idea.location.is_empty() { "TBD" } else { idea.location.as_str() }
            ),
            dim,
        )),
        Line::from(Span::styled(
            format!(
                "💰 {}  🕐 {}",
                idea.estimated_cost.label(),
                if idea.duration.is_empty() { "Flexible" } else { idea.duration.as_str() }
            ),
            dim,
        )),
        Line::from(Span::styled(
            format!("⏰ {}  🌍 {}", idea.best_time.label(), idea.season.label()),
            dim,
        )),
    ];
    if let Some(when) = idea.scheduled {
        lines.push(Line::from(Span::styled(
            format!("📅 {}", when.format("%Y-%m-%d")),
            Style::default().fg(Color::Yellow),
        )));
    }
    if !idea.notes.is_empty() {
        lines.push(Line::from(format!("📝 {}", idea.notes)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "{} {}  {}",
            idea.created_by_avatar,
            idea.created_by,
            time_ago(idea.timestamp, now)
        ),
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
