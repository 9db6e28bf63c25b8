//! Pure playlist rules.

use super::types::{Song, SongDraft};
use crate::core::constants::DEFAULT_SONG_GENRE;
use crate::profile::UserProfile;
use chrono::{DateTime, Utc};
use std::io;
use uuid::Uuid;

/// Build a song from a draft. Title and artist are required; a blank genre
/// becomes "Unknown".
pub fn add_song(draft: &SongDraft, added_by: &UserProfile, now: DateTime<Utc>) -> io::Result<Song> {
    let title = draft.title.trim();
    let artist = draft.artist.trim();
    if title.is_empty() || artist.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "A song needs a title and an artist",
        ));
    }

    let genre = match draft.genre.trim() {
        "" => DEFAULT_SONG_GENRE,
        genre => genre,
    };
    Ok(Song {
        id: Uuid::new_v4().to_string(),
        title: title.to_string(),
        artist: artist.to_string(),
        added_by: added_by.name.clone(),
        added_by_avatar: added_by.avatar.clone(),
        timestamp: now,
        loved: false,
        genre: genre.to_string(),
        mood: draft.mood,
    })
}

/// Songs carry a plain flag, no counter.
pub fn toggle_love(song: &mut Song) {
    song.loved = !song.loved;
}

pub fn loved_count(songs: &[Song]) -> usize {
    songs.iter().filter(|s| s.loved).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playlist::types::SongMood;

    #[test]
    fn test_title_and_artist_required() {
        let ben = UserProfile::placeholder("Bug");
        let mut draft = SongDraft {
            title: "Yellow".to_string(),
            ..SongDraft::default()
        };
        assert!(add_song(&draft, &ben, Utc::now()).is_err());

        draft.artist = " Coldplay ".to_string();
        let song = add_song(&draft, &ben, Utc::now()).unwrap();
        assert_eq!(song.artist, "Coldplay");
        assert_eq!(song.genre, "Unknown");
        assert_eq!(song.mood, SongMood::Romantic);
        assert_eq!(song.added_by, "Bug");
        assert!(!song.loved);
    }

    #[test]
    fn test_love_is_a_flag() {
        let draft = SongDraft {
            title: "Lover".to_string(),
            artist: "Taylor Swift".to_string(),
            genre: "Pop".to_string(),
            mood: SongMood::Happy,
        };
        let ben = UserProfile::placeholder("Bug");
        let mut songs = vec![add_song(&draft, &ben, Utc::now()).unwrap()];
        assert_eq!(songs[0].genre, "Pop");
        toggle_love(&mut songs[0]);
        assert_eq!(loved_count(&songs), 1);
        toggle_love(&mut songs[0]);
        assert_eq!(loved_count(&songs), 0);
    }
}
