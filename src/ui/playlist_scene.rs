//! UI rendering for the shared playlist.

use super::common::{
    create_panel_layout, render_empty, render_info_panel_frame, render_status_bar, ListCursor,
};
use super::compose::ComposeForm;
use chrono::{DateTime, Utc};
use garden::core::time_ago;
use garden::playlist::{Playlist, SongDraft, SongMood};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

pub fn song_form() -> ComposeForm {
    ComposeForm::new("🎵 Add a Song")
        .text("Title", 80)
        .text("Artist", 80)
        .text("Genre", 40)
        .choice(
            "Mood",
            SongMood::ALL.iter().map(|m| format!("{} {}", m.emoji(), m.label())),
            1,
        )
}

pub fn song_draft(form: &ComposeForm) -> SongDraft {
    SongDraft {
        title: form.value(0).to_string(),
        artist: form.value(1).to_string(),
        genre: form.value(2).to_string(),
        mood: SongMood::ALL[form.selected(3) % SongMood::ALL.len()],
    }
}

pub fn render_playlist(
    frame: &mut Frame,
    area: Rect,
    playlist: &Playlist,
    cursor: &ListCursor,
    now: DateTime<Utc>,
    accent: Color,
) {
    let layout = create_panel_layout(frame, area, " 🎵 Our Playlist: Us ", accent, 30);
    let songs = playlist.songs();

    if songs.is_empty() {
        render_empty(frame, layout.content, "No songs yet. Press [N] to add the first 🎶");
    } else {
        let items: Vec<ListItem> = songs
            .iter()
            .enumerate()
            .map(|(i, song)| {
                let marker = if i == cursor.selected_index { "▶ " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::raw(marker),
                    Span::raw(format!("{} ", song.mood.emoji())),
                    Span::styled(
                        song.title.clone(),
                        Style::default().fg(accent).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!(" by {}", song.artist)),
                    Span::styled(
                        if song.loved { "  ♥" } else { "" },
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
        &format!("{} songs  ♥ {} loved", songs.len(), playlist.loved_count()),
        Color::White,
        &[
            ("[N]", "Add song"),
            ("[L]", "Love"),
            ("[↑/↓]", "Select"),
            ("[Q]", "Quit"),
        ],
    );

    let inner = render_info_panel_frame(frame, layout.info_panel, " Song ");
    if let Some(song) = cursor.pick(songs) {
        let lines = vec![
            Line::from(Span::styled(
                song.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(song.artist.clone()),
            Line::from(""),
            Line::from(Span::styled(
                format!("🎼 {}", song.genre),
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                format!("{} {}", song.mood.emoji(), song.mood.label()),
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!(
                    "Added by {} {}, {}",
                    song.added_by_avatar,
                    song.added_by,
                    time_ago(song.timestamp, now)
                ),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}
