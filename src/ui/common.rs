//! Shared UI pieces for the garden panels.

use garden::profile::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};

/// Areas returned by [`create_panel_layout`].
pub struct PanelLayout {
    pub content: Rect,
    /// Two lines at the bottom of the left column.
    pub status_bar: Rect,
    pub info_panel: Rect,
}

/// Bordered panel split into content, a 2-line status bar and an info column.
///
/// ```text
/// ┌─ Title ─────────────────────────┬─ Info ──────┐
/// │   [content area]                │  [info]     │
/// │ [status bar - 2 lines]          │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn create_panel_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    info_panel_width: u16,
) -> PanelLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(info_panel_width)])
        .split(inner);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(2)])
        .split(h_chunks[0]);

    PanelLayout {
        content: v_chunks[0],
        status_bar: v_chunks[1],
        info_panel: h_chunks[1],
    }
}

/// Status message on line 1, key hints on line 2.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }
        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Info column frame. Returns the inner area.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Compact banner at the bottom of `area`; the board stays visible above it.
pub fn render_banner(frame: &mut Frame, area: Rect, color: Color, title: &str, lines: &[String]) {
    let banner_height = (lines.len() as u16 + 3).min(area.height);
    let banner_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(banner_height),
        width: area.width,
        height: banner_height,
    };
    frame.render_widget(Clear, banner_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(banner_area);
    frame.render_widget(block, banner_area);

    let mut text = vec![Line::from(Span::styled(
        title,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];
    text.extend(lines.iter().map(|line| Line::from(line.as_str())));
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
}

/// Dimmed placeholder for an empty list.
pub fn render_empty(frame: &mut Frame, area: Rect, text: &str) {
    frame.render_widget(
        Paragraph::new(Span::styled(
            text.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
        area,
    );
}

/// "♥ 3" when loved, "♡ 3" otherwise.
pub fn heart_label(loved: bool, hearts: u32) -> String {
    format!("{} {}", if loved { "♥" } else { "♡" }, hearts)
}

/// One labelled 0-100 bar.
pub fn render_stat_gauge(frame: &mut Frame, area: Rect, label: &str, value: f64) {
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(stat_color(value)))
        .label(format!("{} {:.0}%", label, value))
        .ratio((value / 100.0).clamp(0.0, 1.0));
    frame.render_widget(gauge, area);
}

/// Green when healthy, yellow when middling, red when low.
pub fn stat_color(value: f64) -> Color {
    if value >= 70.0 {
        Color::Green
    } else if value >= 40.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

pub fn theme_accent(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::Magenta,
        Theme::Immy => Color::LightMagenta,
        Theme::Light => Color::Green,
    }
}

/// Selection within a vertical list.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListCursor {
    pub selected_index: usize,
}

impl ListCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self, len: usize) {
        if self.selected_index + 1 < len {
            self.selected_index += 1;
        }
    }

    pub fn clamp(&mut self, len: usize) {
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }

    pub fn pick<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.selected_index)
    }
}

/// Render an input line with a trailing cursor.
pub fn input_text(value: &str, masked: bool) -> String {
    if masked {
        format!("{}_", "•".repeat(value.chars().count()))
    } else {
        format!("{}_", value)
    }
}
