//! Pop-up compose form used by the board panels.

use super::common::input_text;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub enum FieldInput {
    Text { value: String, max_chars: usize },
    Choice { options: Vec<String>, index: usize },
}

pub struct FormField {
    pub label: &'static str,
    pub input: FieldInput,
}

/// What a key press did to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKey {
    Editing,
    Submit,
    Cancel,
}

pub struct ComposeForm {
    pub title: String,
    pub fields: Vec<FormField>,
    pub focus: usize,
    pub validation_error: Option<String>,
}

impl ComposeForm {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
            focus: 0,
            validation_error: None,
        }
    }

    pub fn text(self, label: &'static str, max_chars: usize) -> Self {
        self.text_with(label, max_chars, "")
    }

    pub fn text_with(mut self, label: &'static str, max_chars: usize, initial: &str) -> Self {
        self.fields.push(FormField {
            label,
            input: FieldInput::Text {
                value: initial.chars().take(max_chars).collect(),
                max_chars,
            },
        });
        self
    }

    pub fn choice<I, S>(mut self, label: &'static str, options: I, index: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        let index = index.min(options.len().saturating_sub(1));
        self.fields.push(FormField {
            label,
            input: FieldInput::Choice { options, index },
        });
        self
    }

    /// Text typed into field `i`, or "" for a choice field.
    pub fn value(&self, i: usize) -> &str {
        match self.fields.get(i).map(|f| &f.input) {
            Some(FieldInput::Text { value, .. }) => value,
            _ => "",
        }
    }

    /// Option picked in field `i`, or 0 for a text field.
    pub fn selected(&self, i: usize) -> usize {
        match self.fields.get(i).map(|f| &f.input) {
            Some(FieldInput::Choice { index, .. }) => *index,
            _ => 0,
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) -> FormKey {
        let count = self.fields.len().max(1);
        match code {
            KeyCode::Esc => return FormKey::Cancel,
            KeyCode::Enter => return FormKey::Submit,
            KeyCode::Tab | KeyCode::Down => self.focus = (self.focus + 1) % count,
            KeyCode::BackTab | KeyCode::Up => self.focus = (self.focus + count - 1) % count,
            KeyCode::Left => self.cycle(false),
            KeyCode::Right => self.cycle(true),
            KeyCode::Backspace => {
                if let Some(FieldInput::Text { value, .. }) = self.focused_input() {
                    value.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(FieldInput::Text { value, max_chars }) = self.focused_input() {
                    if value.chars().count() < *max_chars {
                        value.push(c);
                    }
                }
                self.validation_error = None;
            }
            _ => {}
        }
        FormKey::Editing
    }

    fn focused_input(&mut self) -> Option<&mut FieldInput> {
        self.fields.get_mut(self.focus).map(|f| &mut f.input)
    }

    fn cycle(&mut self, forward: bool) {
        if let Some(FieldInput::Choice { options, index }) = self.focused_input() {
            let len = options.len().max(1);
            *index = if forward {
                (*index + 1) % len
            } else {
                (*index + len - 1) % len
            };
        }
    }

    /// Centered over `area`, leaving the panel visible around it.
    pub fn draw(&self, frame: &mut Frame, area: Rect, accent: Color) {
        let height = (self.fields.len() as u16 + 4).min(area.height);
        let width = area.width.saturating_sub(8).clamp(20, 90).min(area.width);
        let popup = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        };
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let mut lines: Vec<Line> = self
            .fields
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let focused = i == self.focus;
                let label_style = if focused {
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let shown = match &field.input {
                    FieldInput::Text { value, .. } if focused => input_text(value, false),
                    FieldInput::Text { value, .. } => value.clone(),
                    FieldInput::Choice { options, index } => format!(
                        "◀ {} ▶",
                        options.get(*index).map(String::as_str).unwrap_or("")
                    ),
                };
                Line::from(vec![
                    Span::styled(format!("{:>12}: ", field.label), label_style),
                    Span::raw(shown),
                ])
            })
            .collect();

        lines.push(match &self.validation_error {
            Some(error) => Line::from(Span::styled(
                format!("✗ {}", error),
                Style::default().fg(Color::Red),
            )),
            None => Line::from(""),
        });
        lines.push(
            Line::from(Span::styled(
                "[↑/↓] Field  [←/→] Change  [Enter] Save  [Esc] Cancel",
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Center),
        );
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ComposeForm {
        ComposeForm::new("New Song")
            .text("Title", 5)
            .choice("Mood", ["Happy", "Chill"], 1)
    }

    #[test]
    fn test_typing_respects_limit() {
        let mut form = form();
        for c in "Yellow".chars() {
            assert_eq!(form.handle_key(KeyCode::Char(c)), FormKey::Editing);
        }
        assert_eq!(form.value(0), "Yello");
        form.handle_key(KeyCode::Backspace);
        assert_eq!(form.value(0), "Yell");
    }

    #[test]
    fn test_choices_cycle_on_focused_field_only() {
        let mut form = form();
        form.handle_key(KeyCode::Right);
        assert_eq!(form.selected(1), 1);

        form.handle_key(KeyCode::Tab);
        form.handle_key(KeyCode::Right);
        assert_eq!(form.selected(1), 0);
        form.handle_key(KeyCode::Left);
        assert_eq!(form.selected(1), 1);

        // Typing on a choice row does nothing
        form.handle_key(KeyCode::Char('x'));
        assert_eq!(form.value(0), "");
        form.handle_key(KeyCode::Down);
        assert_eq!(form.focus, 0);
    }

    #[test]
    fn test_enter_and_esc_finish() {
        let mut form = ComposeForm::new("Note").text_with("Text", 100, "I love how you...");
        assert_eq!(form.value(0), "I love how you...");
        assert_eq!(form.handle_key(KeyCode::Enter), FormKey::Submit);
        assert_eq!(form.handle_key(KeyCode::Esc), FormKey::Cancel);
    }
}
