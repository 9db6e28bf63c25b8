//! UI rendering for Heart Hunt.

use super::common::{
    create_panel_layout, render_banner, render_info_panel_frame, render_status_bar,
};
use garden::core::{format_clock, ELEMENT_SIZE, STARTING_LIVES};
use garden::heart_hunt::{ElementKind, GameElement, GameOverSummary, GamePhase, HeartHuntGame};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Letter a falling element answers to.
pub fn element_letter(id: u64) -> char {
    (b'a' + (id % 26) as u8) as char
}

/// The lowest on-screen element labelled `letter`, if any.
pub fn target_for_key(game: &HeartHuntGame, letter: char) -> Option<u64> {
    let letter = letter.to_ascii_lowercase();
    game.elements
        .iter()
        .filter(|e| element_letter(e.id) == letter)
        .max_by(|a, b| a.y.total_cmp(&b.y))
        .map(|e| e.id)
}

pub fn render_heart_hunt(
    frame: &mut Frame,
    area: Rect,
    game: &HeartHuntGame,
    last_summary: Option<&GameOverSummary>,
    accent: Color,
) {
    let layout = create_panel_layout(frame, area, " 💖 Heart Hunt ", accent, 24);

    render_playfield(frame, layout.content, game);
    render_status(frame, layout.status_bar, game);
    render_info(frame, layout.info_panel, game);

    if game.phase == GamePhase::Ended {
        if let Some(summary) = last_summary {
            render_game_over(frame, layout.content, summary);
        }
    }
}

fn render_playfield(frame: &mut Frame, area: Rect, game: &HeartHuntGame) {
    if area.width < 4 || area.height == 0 {
        return;
    }

    let cols = area.width.saturating_sub(3) as f64;
    let rows = area.height as f64;
    for element in &game.elements {
        let Some((col, row)) = cell_for(element, game, cols, rows) else {
            continue;
        };
        let cell = Rect {
            x: area.x + col,
            y: area.y + row,
            width: 3.min(area.width.saturating_sub(col)),
            height: 1,
        };
        frame.render_widget(Paragraph::new(element_span(element)), cell);
    }

    if game.phase == GamePhase::Idle {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from("Catch hearts, stars and flowers as they fall."),
            Line::from("Avoid the bombs. Miss three and it's over."),
            Line::from(""),
            Line::from(Span::styled(
                "Press [Enter] to start",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(hint, area);
    }
}

/// Map playfield coordinates (element top-left) onto a terminal cell.
fn cell_for(element: &GameElement, game: &HeartHuntGame, cols: f64, rows: f64) -> Option<(u16, u16)> {
    let field = game.playfield;
    let centre_y = element.y + ELEMENT_SIZE / 2.0;
    if centre_y < 0.0 || centre_y >= field.height {
        return None;
    }
    let col = ((element.x / field.width) * cols).clamp(0.0, cols) as u16;
    let row = ((centre_y / field.height) * rows).clamp(0.0, rows - 1.0) as u16;
    Some((col, row))
}

fn element_span(element: &GameElement) -> Line<'static> {
    let color = match element.kind {
        ElementKind::Heart => Color::LightRed,
        ElementKind::Star => Color::Yellow,
        ElementKind::Flower => Color::LightMagenta,
        ElementKind::Bomb => Color::DarkGray,
    };
    Line::from(vec![
        Span::raw(element.kind.emoji()),
        Span::styled(
            element_letter(element.id).to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])
}

fn render_status(frame: &mut Frame, area: Rect, game: &HeartHuntGame) {
    match game.phase {
        GamePhase::Idle => render_status_bar(
            frame,
            area,
            "Ready when you are",
            Color::White,
            &[("[Enter]", "Start"), ("[Tab]", "Switch panel"), ("[Q]", "Quit")],
        ),
        GamePhase::Playing => render_status_bar(
            frame,
            area,
            "Type an element's letter to catch it",
            Color::LightMagenta,
            &[("[a-z]", "Catch"), ("[Space]", "Pause"), ("[Esc]", "End")],
        ),
        GamePhase::Paused => render_status_bar(
            frame,
            area,
            "Paused",
            Color::Yellow,
            &[("[Space]", "Resume"), ("[Esc]", "End")],
        ),
        GamePhase::Ended => render_status_bar(
            frame,
            area,
            "Game over",
            Color::Red,
            &[("[Enter]", "Play again"), ("[D]", "Dismiss"), ("[Q]", "Quit")],
        ),
    }
}

fn render_info(frame: &mut Frame, area: Rect, game: &HeartHuntGame) {
    let inner = render_info_panel_frame(frame, area, " Stats ");
    let stats = &game.stats;

    let lives: String = (0..STARTING_LIVES)
        .map(|i| if i < stats.lives { "❤️" } else { "🖤" })
        .collect();

    let mut lines = vec![
        info_line("Score", stats.score.to_string(), Color::White),
        info_line("Level", stats.level.to_string(), Color::Cyan),
        Line::from(vec![Span::styled("Lives  ", Style::default().fg(Color::Gray)), Span::raw(lives)]),
        info_line("Hearts", stats.hearts_collected.to_string(), Color::LightRed),
        info_line("Time", format_clock(game.elapsed_secs), Color::White),
    ];
    if stats.streak >= 2 {
        lines.push(info_line("Streak", format!("{}x 🔥", stats.streak), Color::Yellow));
    }
    lines.push(Line::from(""));
    lines.push(info_line("Best", stats.high_score.to_string(), Color::Yellow));
    lines.push(info_line("Played", stats.games_played.to_string(), Color::Gray));
    lines.push(info_line(
        "All hearts",
        stats.total_hearts_collected.to_string(),
        Color::Gray,
    ));
    lines.push(Line::from(""));
    for kind in ElementKind::ALL {
        lines.push(Line::from(Span::styled(
            format!("{} {:+}", kind.emoji(), kind.points()),
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn info_line(label: &str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<7}", label), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(color)),
    ])
}

fn render_game_over(frame: &mut Frame, area: Rect, summary: &GameOverSummary) {
    let mut lines = vec![format!(
        "Score {}  ·  {} hearts  ·  level {}  ·  {}",
        summary.score,
        summary.hearts_collected,
        summary.level,
        format_clock(summary.elapsed_secs)
    )];
    let (title, color) = if summary.new_high_score {
        lines.push(format!("Previous best: {}", summary.previous_high_score));
        ("🎉 New High Score! 🎉", Color::Yellow)
    } else {
        ("Game Over", Color::Red)
    };
    render_banner(frame, area, color, title, &lines);
}
