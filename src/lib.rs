//! Garden - Heart Hunt and Koala Care
//!
//! Library side of the terminal garden: the two timer-driven simulators, the
//! shared boards (love notes, diary, date ideas, playlist), the store they
//! persist through, profiles, and the notification bus. The terminal shell
//! lives in the binary.

pub mod board;
pub mod config;
pub mod core;
pub mod date_ideas;
pub mod diary;
pub mod driver;
pub mod heart_hunt;
pub mod koala;
pub mod love_notes;
pub mod notifications;
pub mod playlist;
pub mod profile;
pub mod store;
