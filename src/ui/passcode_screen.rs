use super::common::input_text;
use garden::core::PASSCODE_LENGTH;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Four-digit gate shown before anything else.
pub struct PasscodeScreen {
    pub input: String,
    pub error: Option<String>,
}

impl PasscodeScreen {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            error: None,
        }
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(2), // Subtitle
                Constraint::Length(3), // Input
                Constraint::Length(2), // Error
                Constraint::Min(0),
                Constraint::Length(3), // Controls
            ])
            .split(area);

        let title = Paragraph::new("🌸 Enchanted Garden 🌸")
            .style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        let subtitle = Paragraph::new("Enter our secret code")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        f.render_widget(subtitle, chunks[1]);

        let input_area = Rect {
            x: chunks[2].x + chunks[2].width.saturating_sub(16) / 2,
            width: 16.min(chunks[2].width),
            ..chunks[2]
        };
        let input = Paragraph::new(input_text(&self.input, true))
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(input, input_area);

        if let Some(error) = &self.error {
            let line = Line::from(Span::styled(
                format!("✗ {}", error),
                Style::default().fg(Color::Red),
            ));
            f.render_widget(
                Paragraph::new(line).alignment(Alignment::Center),
                chunks[3],
            );
        }

        let controls = Paragraph::new("[Enter] Unlock    [Esc] Quit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(controls, chunks[5]);
    }

    pub fn handle_char_input(&mut self, c: char) {
        if c.is_ascii_digit() && self.input.len() < PASSCODE_LENGTH {
            self.input.push(c);
            self.error = None;
        }
    }

    pub fn handle_backspace(&mut self) {
        self.input.pop();
    }

    /// Clear the field after a wrong guess.
    pub fn reject(&mut self) {
        self.input.clear();
        self.error = Some("That's not quite right, try again 💕".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_digits_up_to_length() {
        let mut screen = PasscodeScreen::new();
        for c in "12a3456".chars() {
            screen.handle_char_input(c);
        }
        assert_eq!(screen.input, "1234");
        screen.handle_backspace();
        assert_eq!(screen.input, "123");
    }

    #[test]
    fn test_reject_clears_input() {
        let mut screen = PasscodeScreen::new();
        screen.handle_char_input('9');
        screen.reject();
        assert!(screen.input.is_empty());
        assert!(screen.error.is_some());
    }
}
