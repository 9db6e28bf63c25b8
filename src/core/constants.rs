// Heart Hunt timing
pub const ADVANCE_TICK_MS: u64 = 30;
pub const CLOCK_TICK_MS: u64 = 1000;
pub const SPAWN_BASE_PERIOD_MS: u64 = 600;
pub const SPAWN_PERIOD_STEP_MS: u64 = 30;
pub const SPAWN_MIN_PERIOD_MS: u64 = 150;

// Heart Hunt session rules
pub const STARTING_LIVES: u32 = 3;
pub const STARTING_LEVEL: u32 = 1;
pub const POINTS_PER_LEVEL: u32 = 100;
pub const COMBO_STREAK_THRESHOLD: u32 = 5;
pub const COMBO_POINTS_PER_STREAK: u32 = 2;

// Heart Hunt element motion
pub const BASE_FALL_SPEED: f64 = 4.0;
pub const FALL_SPEED_PER_LEVEL: f64 = 0.8;
pub const SPAWN_Y: f64 = -50.0;
pub const ELEMENT_SIZE: f64 = 60.0;
pub const DEFAULT_PLAYFIELD_WIDTH: f64 = 480.0;
pub const DEFAULT_PLAYFIELD_HEIGHT: f64 = 640.0;

// Koala care
pub const DECAY_INTERVAL_MS: u64 = 30_000;
pub const DECAY_HUNGER: f64 = 1.0;
pub const DECAY_ENERGY: f64 = 0.5;
pub const DECAY_HAPPINESS: f64 = 0.3;
pub const STAT_MIN: f64 = 0.0;
pub const STAT_MAX: f64 = 100.0;
pub const XP_PER_ACTION: u32 = 10;
pub const XP_PER_PET_LEVEL: u32 = 100;
pub const MAX_ACTIVITIES: usize = 20;
pub const DEFAULT_PET_NAME: &str = "Cuddles";

// Shared boards
pub const MAX_LOVE_NOTE_CHARS: usize = 500;
pub const NOTE_PREVIEW_CHARS: usize = 50;
pub const MAX_DATE_RATING: u8 = 5;
pub const DEFAULT_SONG_GENRE: &str = "Unknown";
pub const GARDEN_BOT_NAME: &str = "Garden Bot";
pub const GARDEN_BOT_AVATAR: &str = "🤖";

// Notifications
pub const MAX_INBOX_ENTRIES: usize = 20;
pub const NOTIFICATION_CHANNEL_CAPACITY: usize = 64;

// Store keys
pub const HEART_GAME_STATS_KEY: &str = "heartGameStats";
pub const KOALA_STATS_KEY: &str = "koalaStats";
pub const KOALA_ACTIVITIES_KEY: &str = "koalaActivities";
pub const NOTIFICATIONS_KEY: &str = "gardenNotifications";
pub const LOVE_NOTES_KEY: &str = "gardenAffirmations";
pub const DIARY_KEY: &str = "diaryEntries";
pub const DATE_IDEAS_KEY: &str = "dateIdeas";
pub const PLAYLIST_KEY: &str = "gardenPlaylistUs";
pub const AUTH_KEY: &str = "gardenAuth";
pub const CURRENT_USER_KEY: &str = "currentUser";
pub const USER_KEY_PREFIX: &str = "user_";

// Profiles and access
pub const FIRST_USER_ID: &str = "Keychain";
pub const SECOND_USER_ID: &str = "Bug";
pub const DEFAULT_PASSCODE: &str = "1207";
pub const PASSCODE_LENGTH: usize = 4;

// Terminal shell frame rate
pub const FRAME_MS: u64 = 30;
