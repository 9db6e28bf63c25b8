//! Profile selection and registration screens.

use super::common::{input_text, theme_accent};
use garden::profile::{Theme, UserProfile, AVATARS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// "Who's visiting the garden?"
pub struct ProfileSelectScreen {
    pub selected_index: usize,
}

impl ProfileSelectScreen {
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    /// Number of rows: one per profile plus "register" while a slot is free.
    pub fn row_count(profiles: &[UserProfile]) -> usize {
        if profiles.len() < 2 {
            profiles.len() + 1
        } else {
            profiles.len()
        }
    }

    pub fn is_register_row(&self, profiles: &[UserProfile]) -> bool {
        self.selected_index >= profiles.len()
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self, profiles: &[UserProfile]) {
        if self.selected_index + 1 < Self::row_count(profiles) {
            self.selected_index += 1;
        }
    }

    pub fn draw(&self, f: &mut Frame, area: Rect, profiles: &[UserProfile]) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(4),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Who's visiting the garden?")
            .style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        let mut items: Vec<ListItem> = profiles
            .iter()
            .enumerate()
            .map(|(i, profile)| {
                let marker = if i == self.selected_index { "▶ " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::raw(marker),
                    Span::raw(format!("{} ", profile.avatar)),
                    Span::styled(
                        profile.name.clone(),
                        Style::default()
                            .fg(theme_accent(profile.theme))
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {} {}", profile.theme.emoji(), profile.theme.name()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        if profiles.len() < 2 {
            let marker = if self.is_register_row(profiles) {
                "▶ "
            } else {
                "  "
            };
            items.push(ListItem::new(Line::from(vec![
                Span::raw(marker),
                Span::styled("✨ Register a new gardener", Style::default().fg(Color::Green)),
            ])));
        }

        let list = List::new(items).block(Block::default().borders(Borders::ALL));
        f.render_widget(list, chunks[1]);

        let controls = Paragraph::new("[↑/↓] Select    [Enter] Continue    [Esc] Quit")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(controls, chunks[2]);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterField {
    Name,
    Email,
    Avatar,
    Theme,
}

impl RegisterField {
    fn next(self) -> Self {
        match self {
            RegisterField::Name => RegisterField::Email,
            RegisterField::Email => RegisterField::Avatar,
            RegisterField::Avatar => RegisterField::Theme,
            RegisterField::Theme => RegisterField::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            RegisterField::Name => RegisterField::Theme,
            RegisterField::Email => RegisterField::Name,
            RegisterField::Avatar => RegisterField::Email,
            RegisterField::Theme => RegisterField::Avatar,
        }
    }
}

pub struct RegisterScreen {
    pub name_input: String,
    pub email_input: String,
    pub avatar_index: usize,
    pub theme: Theme,
    pub focus: RegisterField,
    pub validation_error: Option<String>,
}

impl RegisterScreen {
    pub fn new() -> Self {
        Self {
            name_input: String::new(),
            email_input: String::new(),
            avatar_index: 0,
            theme: Theme::default(),
            focus: RegisterField::Name,
            validation_error: None,
        }
    }

    pub fn avatar(&self) -> &'static str {
        AVATARS[self.avatar_index % AVATARS.len()]
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn handle_char_input(&mut self, c: char) {
        match self.focus {
            RegisterField::Name => {
                if self.name_input.chars().count() < 24 {
                    self.name_input.push(c);
                }
            }
            RegisterField::Email => self.email_input.push(c),
            RegisterField::Avatar | RegisterField::Theme => {}
        }
        self.validation_error = None;
    }

    pub fn handle_backspace(&mut self) {
        match self.focus {
            RegisterField::Name => {
                self.name_input.pop();
            }
            RegisterField::Email => {
                self.email_input.pop();
            }
            RegisterField::Avatar | RegisterField::Theme => {}
        }
    }

    /// Left/Right on the avatar or theme row.
    pub fn cycle(&mut self, forward: bool) {
        match self.focus {
            RegisterField::Avatar => {
                self.avatar_index = if forward {
                    (self.avatar_index + 1) % AVATARS.len()
                } else {
                    (self.avatar_index + AVATARS.len() - 1) % AVATARS.len()
                };
            }
            RegisterField::Theme => {
                self.theme = if forward {
                    self.theme.next()
                } else {
                    self.theme.next().next()
                };
            }
            RegisterField::Name | RegisterField::Email => {}
        }
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(4), // Name
                Constraint::Length(4), // Email
                Constraint::Length(2), // Avatar
                Constraint::Length(2), // Theme
                Constraint::Length(2), // Validation
                Constraint::Min(0),
                Constraint::Length(3), // Controls
            ])
            .split(area);

        let title = Paragraph::new("Join the Garden")
            .style(
                Style::default()
                    .fg(theme_accent(self.theme))
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        self.draw_input(f, chunks[1], "Name:", &self.name_input, RegisterField::Name);
        self.draw_input(f, chunks[2], "Email:", &self.email_input, RegisterField::Email);

        let avatars: Vec<Span> = AVATARS
            .iter()
            .enumerate()
            .map(|(i, avatar)| {
                if i == self.avatar_index {
                    Span::styled(format!("[{}]", avatar), Style::default().fg(Color::Yellow))
                } else {
                    Span::raw(format!(" {} ", avatar))
                }
            })
            .collect();
        let mut avatar_line = vec![self.label("Avatar: ", RegisterField::Avatar)];
        avatar_line.extend(avatars);
        f.render_widget(Paragraph::new(Line::from(avatar_line)), chunks[3]);

        let theme_line = Line::from(vec![
            self.label("Theme:  ", RegisterField::Theme),
            Span::styled(
                format!("◀ {} {} ▶", self.theme.emoji(), self.theme.name()),
                Style::default().fg(theme_accent(self.theme)),
            ),
        ]);
        f.render_widget(Paragraph::new(theme_line), chunks[4]);

        if let Some(error) = &self.validation_error {
            let line = Line::from(Span::styled(
                format!("✗ {}", error),
                Style::default().fg(Color::Red),
            ));
            f.render_widget(Paragraph::new(line), chunks[5]);
        }

        let controls = Paragraph::new("[Tab] Next field    [←/→] Change    [Enter] Register    [Esc] Back")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(controls, chunks[7]);
    }

    fn label(&self, text: &'static str, field: RegisterField) -> Span<'static> {
        if self.focus == field {
            Span::styled(text, Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        } else {
            Span::styled(text, Style::default().fg(Color::Gray))
        }
    }

    fn draw_input(&self, f: &mut Frame, area: Rect, label: &'static str, value: &str, field: RegisterField) {
        f.render_widget(Paragraph::new(Line::from(self.label(label, field))), area);
        let input_area = Rect {
            y: area.y + 1,
            height: 3.min(area.height.saturating_sub(1)),
            ..area
        };
        let text = if self.focus == field {
            input_text(value, false)
        } else {
            value.to_string()
        };
        let border = if self.focus == field {
            Color::White
        } else {
            Color::DarkGray
        };
        let widget = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
        f.render_widget(widget, input_area);
    }
}
