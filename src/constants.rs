//! Application-wide constants and configuration values
//!
//! This module centralizes the fixed values the feed, projection and
//! presentation code share.

/// Default timeout for the remote feed request in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 10;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 4;

/// Remote feed document served with the latest fixtures and replay links
pub const DEFAULT_FEED_URL: &str =
    "https://raw.githubusercontent.com/danta-jz/redlens/main/matches_with_videos.json";

/// Feed settings
pub mod feed {
    /// Competition assumed when a feed entry omits it
    pub const DEFAULT_COMPETITION: &str = "Premier League";

    /// Status code marking a completed fixture
    pub const STATUS_COMPLETED: &str = "C";

    /// Status code marking an unplayed fixture
    pub const STATUS_UNPLAYED: &str = "U";

    /// Number of fixtures in the home-view upcoming preview
    pub const UPCOMING_PREVIEW_LEN: usize = 3;

    /// A finished fixture younger than this stays the default home-view slot
    pub const RECENT_RESULT_WINDOW_HOURS: i64 = 48;
}

/// Formats shared by the feed and the projection
pub mod formats {
    pub const DATE: &str = "%Y-%m-%d";
    pub const TIME: &str = "%H:%M";
    pub const DATE_TIME: &str = "%Y-%m-%d %H:%M";
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for feed URL override
    pub const FEED_URL: &str = "REDLENS_FEED_URL";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "REDLENS_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "REDLENS_HTTP_TIMEOUT";

    /// Environment variable pointing at a bundled feed file on disk
    pub const BUNDLED_FEED: &str = "REDLENS_BUNDLED_FEED";
}

/// Terminal title shown while the app is running
pub const TERMINAL_TITLE: &str = "RedLens";

/// Default log file name inside the log directory
pub const LOG_FILE_NAME: &str = "redlens.log";
