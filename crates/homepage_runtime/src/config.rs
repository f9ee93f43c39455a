//! Compile-time configuration: storage keys, timings, and remote endpoints.

use std::time::Duration;

/// Preference key holding the dark-mode flag.
pub const DARK_MODE_PREF_KEY: &str = "darkMode";

/// DOM id of the search input (focus/blur/select targets).
pub const SEARCH_INPUT_DOM_ID: &str = "searchInput";

pub const BACKGROUND_ROTATION_INTERVAL: Duration = Duration::from_secs(30 * 60);

pub const MUSIC_INIT_DELAY: Duration = Duration::from_millis(800);
pub const MUSIC_PROBE_PERIOD: Duration = Duration::from_millis(100);
pub const MUSIC_PROBE_TIMEOUT: Duration = Duration::from_secs(10);
/// Wait after the player marker appears before looking for the instance.
pub const MUSIC_SETTLE_DELAY: Duration = Duration::from_millis(500);
pub const MUSIC_AUTOPLAY_DELAY: Duration = Duration::from_millis(500);
pub const MUSIC_RECONCILE_PERIOD: Duration = Duration::from_secs(1);

/// Delay between drag release and the bounce transition.
pub const DRAG_BOUNCE_DELAY: Duration = Duration::from_millis(100);
/// How long the bounce transition stays applied.
pub const DRAG_BOUNCE_DURATION: Duration = Duration::from_millis(300);

pub const GAZE_DISTANCE_CAP: f64 = 30.0;
pub const GAZE_DISTANCE_DIVISOR: f64 = 15.0;
pub const GAZE_MAX_X: f64 = 2.0;
pub const GAZE_MAX_Y: f64 = 1.0;

pub const BACKGROUND_CATEGORIES: [&str; 6] = [
    "nature",
    "technology",
    "space",
    "abstract",
    "minimalist",
    "architecture",
];

pub const STATIC_BACKGROUND_URLS: [&str; 3] = [
    "https://images.unsplash.com/photo-1518837695005-2083093ee35b?w=1920",
    "https://images.unsplash.com/photo-1487147264018-f937fba0c817?w=1920",
    "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=1920",
];

pub const MUSIC_FALLBACK_EMBED_URL: &str =
    "https://music.163.com/outchain/player?type=0&id=3778678&auto=1&height=90";
/// Stable id marking an injected fallback embed.
pub const MUSIC_FALLBACK_DOM_ID: &str = "neteaseMusicFallback";
/// Playlist the third-party player loads when it does materialise.
pub const MUSIC_PLAYLIST_ID: &str = "3778678";
