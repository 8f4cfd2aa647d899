// HeadlineScope - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors preserve the causal chain for diagnostic logging.
//
// Markup that yields no headlines is deliberately NOT an error: the extractor
// returns an empty set and the pipeline reports it as its own outcome.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Top-level error type for HeadlineScope operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum HeadlineScopeError {
    /// Fetching the source page failed.
    Fetch(FetchError),

    /// Export operation failed.
    Export(ExportError),

    /// Configuration loading or validation failed.
    Config(ConfigError),
}

impl fmt::Display for HeadlineScopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch(e) => write!(f, "Fetch error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for HeadlineScopeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Fetch(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Fetch errors
// ---------------------------------------------------------------------------

/// Errors raised while retrieving the source page.
///
/// There is no retry layer: every variant is reported once and the pipeline
/// surfaces it to the presenter as "no data".
#[derive(Debug)]
pub enum FetchError {
    /// The HTTP client could not be constructed (TLS backend, bad header).
    ClientBuild { source: reqwest::Error },

    /// The request did not complete within the configured timeout.
    Timeout {
        url: String,
        timeout: Duration,
        source: reqwest::Error,
    },

    /// Connection, DNS, TLS or protocol failure.
    Transport { url: String, source: reqwest::Error },

    /// The server answered with a non-2xx status.
    Status { url: String, status: u16 },

    /// The response body could not be read or decoded.
    Body { url: String, source: reqwest::Error },

    /// The response body exceeds the allowed size.
    BodyTooLarge {
        url: String,
        size: usize,
        max_size: usize,
    },
}

impl FetchError {
    /// URL the failed request targeted, when known.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::ClientBuild { .. } => None,
            Self::Timeout { url, .. }
            | Self::Transport { url, .. }
            | Self::Status { url, .. }
            | Self::Body { url, .. }
            | Self::BodyTooLarge { url, .. } => Some(url),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClientBuild { source } => {
                write!(f, "Could not build HTTP client: {source}")
            }
            Self::Timeout { url, timeout, .. } => write!(
                f,
                "Request to '{url}' timed out after {}s",
                timeout.as_secs_f64()
            ),
            Self::Transport { url, source } => {
                write!(f, "Request to '{url}' failed: {source}")
            }
            Self::Status { url, status } => {
                write!(f, "'{url}' responded with HTTP status {status}")
            }
            Self::Body { url, source } => {
                write!(f, "Could not read response body from '{url}': {source}")
            }
            Self::BodyTooLarge {
                url,
                size,
                max_size,
            } => write!(
                f,
                "Response from '{url}' is {size} bytes, exceeds maximum of {max_size} bytes"
            ),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ClientBuild { source } => Some(source),
            Self::Timeout { source, .. } => Some(source),
            Self::Transport { source, .. } => Some(source),
            Self::Body { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<FetchError> for HeadlineScopeError {
    fn from(e: FetchError) -> Self {
        Self::Fetch(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export file.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },

    /// JSON serialisation error.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "CSV export error '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "JSON export error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

impl From<ExportError> for HeadlineScopeError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
///
/// `load_config` downgrades these to warning strings and falls back to
/// defaults; it never returns one.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for HeadlineScopeError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for HeadlineScope results.
pub type Result<T> = std::result::Result<T, HeadlineScopeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_status_error_display_includes_url_and_code() {
        let err = FetchError::Status {
            url: "https://example.com/".to_string(),
            status: 503,
        };
        let msg = err.to_string();
        assert!(msg.contains("https://example.com/"));
        assert!(msg.contains("503"));
        assert_eq!(err.url(), Some("https://example.com/"));
    }

    #[test]
    fn test_top_level_error_preserves_source_chain() {
        let inner = ConfigError::ValueOutOfRange {
            field: "[analysis] top_n".to_string(),
            value: "0".to_string(),
            expected: "1-100".to_string(),
        };
        let err: HeadlineScopeError = inner.into();
        assert!(err.to_string().starts_with("Configuration error:"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_export_io_error_exposes_source() {
        let err = ExportError::Io {
            path: PathBuf::from("out.csv"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("out.csv"));
        assert!(err.source().is_some());
    }
}
