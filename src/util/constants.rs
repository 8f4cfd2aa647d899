// HeadlineScope - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "HeadlineScope";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "HeadlineScope";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Source / fetching
// =============================================================================

/// Front page analysed when no URL is configured.
pub const DEFAULT_SOURCE_URL: &str = "https://news.ycombinator.com/";

/// User-Agent sent with every fetch. Some sites reject requests that
/// advertise a non-browser client.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Whole-request timeout (connect + headers + body).
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Minimum configurable fetch timeout.
pub const MIN_FETCH_TIMEOUT_SECS: u64 = 1;

/// Maximum configurable fetch timeout.
pub const MAX_FETCH_TIMEOUT_SECS: u64 = 120;

/// Upper bound on a response body. A front page is a few hundred KB; anything
/// far beyond that is not the page we expect.
pub const MAX_BODY_BYTES: usize = 8 * 1024 * 1024; // 8 MB

// =============================================================================
// Cache
// =============================================================================

/// How long a successful fetch is reused before the source is hit again.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Maximum configurable cache TTL (one day). 0 disables caching.
pub const MAX_CACHE_TTL_SECS: u64 = 86_400;

/// Most distinct URLs the response cache holds; the least recently used
/// page is evicted beyond this.
pub const CACHE_CAPACITY: usize = 32;

// =============================================================================
// Analysis
// =============================================================================

/// Number of most-frequent words shown in the word table and chart.
pub const DEFAULT_TOP_N: usize = 10;

/// Minimum configurable top-N.
pub const MIN_TOP_N: usize = 1;

/// Maximum configurable top-N.
pub const MAX_TOP_N: usize = 100;

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

/// Width in characters of the longest bar in the plain-text report charts.
pub const REPORT_BAR_WIDTH: usize = 40;

/// Headlines longer than this are truncated in the plain-text report table.
pub const REPORT_HEADLINE_WIDTH: usize = 72;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Valid values for `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default file names offered by the export dialogs.
pub const DEFAULT_SENTIMENT_CSV_NAME: &str = "headline_sentiment.csv";
pub const DEFAULT_WORDS_CSV_NAME: &str = "top_words.csv";
pub const DEFAULT_SNAPSHOT_JSON_NAME: &str = "headline_analysis.json";
