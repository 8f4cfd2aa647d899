// HeadlineScope - platform/config.rs
//
// Platform-specific configuration, data directory resolution, and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Resolved platform paths for HeadlineScope configuration and exports.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/headlinescope/ or %APPDATA%\HeadlineScope\config\)
    pub config_dir: PathBuf,

    /// Default directory offered by export dialogs.
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let data_dir = proj_dirs.data_dir().to_path_buf();

            tracing::debug!(
                config = %config_dir.display(),
                data = %data_dir.display(),
                "Platform paths resolved"
            );

            Self {
                config_dir,
                data_dir,
            }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
                data_dir: PathBuf::from("."),
            }
        }
    }

    /// Paths rooted at an explicit directory (`--config-dir`).
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self {
            data_dir: config_dir.clone(),
            config_dir,
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored so an older binary can read a newer
/// config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    pub source: SourceSection,
    pub analysis: AnalysisSection,
    pub cache: CacheSection,
    pub ui: UiSection,
    pub logging: LoggingSection,
}

/// `[source]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct SourceSection {
    /// Page to fetch headlines from.
    pub url: Option<String>,
    /// Whole-request timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// User-Agent header value.
    pub user_agent: Option<String>,
}

/// `[analysis]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct AnalysisSection {
    /// Number of most-frequent words to show.
    pub top_n: Option<usize>,
}

/// `[cache]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct CacheSection {
    /// Seconds a successful fetch is reused (0 = no caching).
    pub ttl_secs: Option<u64>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
    /// Body font size in points.
    pub font_size: Option<f32>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// All values are validated against named constants at load time.
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    // -- Source --
    pub source_url: String,
    pub fetch_timeout: Duration,
    pub user_agent: String,

    // -- Analysis --
    pub top_n: usize,

    // -- Cache --
    pub cache_ttl: Duration,

    // -- UI --
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,
    /// Body font size in points.
    pub font_size: f32,

    // -- Logging --
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source_url: constants::DEFAULT_SOURCE_URL.to_string(),
            fetch_timeout: Duration::from_secs(constants::DEFAULT_FETCH_TIMEOUT_SECS),
            user_agent: constants::DEFAULT_USER_AGENT.to_string(),
            top_n: constants::DEFAULT_TOP_N,
            cache_ttl: Duration::from_secs(constants::DEFAULT_CACHE_TTL_SECS),
            dark_mode: true,
            font_size: constants::DEFAULT_FONT_SIZE,
            log_level: None,
        }
    }
}

/// Whether `url` is an absolute http(s) URL.
pub fn is_valid_source_url(url: &str) -> bool {
    reqwest::Url::parse(url)
        .map(|u| matches!(u.scheme(), "http" | "https") && u.has_host())
        .unwrap_or(false)
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first-run).
/// If the file is unparseable, returns defaults with an error warning; the
/// application still starts but the user is informed.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);

    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            let err = ConfigError::Io {
                path: config_path.clone(),
                source: e,
            };
            let msg = format!("{err}. Using defaults.");
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            let err = ConfigError::TomlParse {
                path: config_path.clone(),
                source: e,
            };
            let msg = format!("{err}. Using defaults.");
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let config = validate(raw, &mut warnings);

    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }

    (config, warnings)
}

/// Record a rejected value as a warning; the default stays in place.
fn reject(
    warnings: &mut Vec<String>,
    field: &str,
    value: impl Display,
    expected: impl Into<String>,
    default: impl Display,
) {
    let err = ConfigError::ValueOutOfRange {
        field: field.to_string(),
        value: value.to_string(),
        expected: expected.into(),
    };
    warnings.push(format!("{err}. Using default ({default})."));
}

/// Validate each field against named constants, accumulating all problems.
fn validate(raw: RawConfig, warnings: &mut Vec<String>) -> AppConfig {
    let mut config = AppConfig::default();

    // -- Source: url --
    if let Some(url) = raw.source.url {
        if is_valid_source_url(&url) {
            config.source_url = url;
        } else {
            reject(
                warnings,
                "[source] url",
                &url,
                "an absolute http(s) URL",
                constants::DEFAULT_SOURCE_URL,
            );
        }
    }

    // -- Source: timeout_secs --
    if let Some(secs) = raw.source.timeout_secs {
        if (constants::MIN_FETCH_TIMEOUT_SECS..=constants::MAX_FETCH_TIMEOUT_SECS).contains(&secs)
        {
            config.fetch_timeout = Duration::from_secs(secs);
        } else {
            reject(
                warnings,
                "[source] timeout_secs",
                secs,
                format!(
                    "{}-{}",
                    constants::MIN_FETCH_TIMEOUT_SECS,
                    constants::MAX_FETCH_TIMEOUT_SECS
                ),
                constants::DEFAULT_FETCH_TIMEOUT_SECS,
            );
        }
    }

    // -- Source: user_agent --
    if let Some(agent) = raw.source.user_agent {
        if agent.trim().is_empty() {
            reject(
                warnings,
                "[source] user_agent",
                &agent,
                "a non-empty string",
                constants::DEFAULT_USER_AGENT,
            );
        } else {
            config.user_agent = agent;
        }
    }

    // -- Analysis: top_n --
    if let Some(n) = raw.analysis.top_n {
        if (constants::MIN_TOP_N..=constants::MAX_TOP_N).contains(&n) {
            config.top_n = n;
        } else {
            reject(
                warnings,
                "[analysis] top_n",
                n,
                format!("{}-{}", constants::MIN_TOP_N, constants::MAX_TOP_N),
                constants::DEFAULT_TOP_N,
            );
        }
    }

    // -- Cache: ttl_secs --
    if let Some(secs) = raw.cache.ttl_secs {
        if secs <= constants::MAX_CACHE_TTL_SECS {
            config.cache_ttl = Duration::from_secs(secs);
        } else {
            reject(
                warnings,
                "[cache] ttl_secs",
                secs,
                format!("0-{}", constants::MAX_CACHE_TTL_SECS),
                constants::DEFAULT_CACHE_TTL_SECS,
            );
        }
    }

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            _ => reject(warnings, "[ui] theme", theme, "\"dark\" or \"light\"", "dark"),
        }
    }

    // -- UI: font_size --
    if let Some(size) = raw.ui.font_size {
        if (constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE).contains(&size) {
            config.font_size = size;
        } else {
            reject(
                warnings,
                "[ui] font_size",
                size,
                format!("{}-{}", constants::MIN_FONT_SIZE, constants::MAX_FONT_SIZE),
                constants::DEFAULT_FONT_SIZE,
            );
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            reject(
                warnings,
                "[logging] level",
                level,
                constants::VALID_LOG_LEVELS.join(", "),
                constants::DEFAULT_LOG_LEVEL,
            );
        }
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn load(content: &str) -> (AppConfig, Vec<String>) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(constants::CONFIG_FILE_NAME), content).unwrap();
        load_config(dir.path())
    }

    #[test]
    fn test_missing_file_gives_defaults_without_warnings() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty());
        assert_eq!(config.source_url, constants::DEFAULT_SOURCE_URL);
        assert_eq!(config.fetch_timeout, Duration::from_secs(10));
        assert_eq!(config.user_agent, "Mozilla/5.0");
        assert_eq!(config.top_n, 10);
    }

    #[test]
    fn test_valid_values_are_applied() {
        let (config, warnings) = load(
            r#"
            [source]
            url = "https://lobste.rs/"
            timeout_secs = 30
            user_agent = "HeadlineScope/1.0"

            [analysis]
            top_n = 25

            [cache]
            ttl_secs = 0

            [ui]
            theme = "Light"
            font_size = 16.0

            [logging]
            level = "DEBUG"

            [future_section]
            ignored = true
            "#,
        );
        assert!(warnings.is_empty(), "{warnings:?}");
        assert_eq!(config.source_url, "https://lobste.rs/");
        assert_eq!(config.fetch_timeout, Duration::from_secs(30));
        assert_eq!(config.user_agent, "HeadlineScope/1.0");
        assert_eq!(config.top_n, 25);
        assert!(config.cache_ttl.is_zero());
        assert!(!config.dark_mode);
        assert_eq!(config.font_size, 16.0);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_out_of_range_values_warn_and_fall_back() {
        let (config, warnings) = load(
            r#"
            [source]
            url = "ftp://example.com/"
            timeout_secs = 0

            [analysis]
            top_n = 1000

            [ui]
            theme = "neon"

            [logging]
            level = "verbose"
            "#,
        );
        assert_eq!(warnings.len(), 5, "{warnings:?}");
        assert!(warnings
            .iter()
            .any(|w| w.contains("'[source] url' = 'ftp://example.com/'")));
        assert!(warnings
            .iter()
            .any(|w| w.contains("'[analysis] top_n' = '1000'") && w.contains("Expected: 1-")));
        assert!(warnings.iter().all(|w| w.contains("Using default (")));
        assert_eq!(config.source_url, constants::DEFAULT_SOURCE_URL);
        assert_eq!(config.top_n, constants::DEFAULT_TOP_N);
        assert!(config.dark_mode);
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_unparseable_file_falls_back_to_defaults() {
        let (config, warnings) = load("[source\nurl = ");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Config parse error"));
        assert!(warnings[0].ends_with("Using defaults."));
        assert_eq!(config.top_n, constants::DEFAULT_TOP_N);
    }

    #[test]
    fn test_source_url_validation() {
        assert!(is_valid_source_url("https://news.ycombinator.com/"));
        assert!(is_valid_source_url("http://127.0.0.1:8080/front"));
        assert!(!is_valid_source_url("news.ycombinator.com"));
        assert!(!is_valid_source_url("file:///etc/passwd"));
        assert!(!is_valid_source_url(""));
    }
}
