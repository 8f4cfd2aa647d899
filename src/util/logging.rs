// HeadlineScope - util/logging.rs
//
// Structured logging with runtime-selectable debug mode.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --debug
//   - Config file: [logging] level = "debug"
//
// Output: stderr, so `--report` output on stdout stays clean.
//
// The HTML parser and HTTP stack log every node and socket at debug level.
// Unless RUST_LOG names them, they are held at `warn` so `--debug` shows the
// pipeline rather than the parse tree.

use super::constants;
use tracing_subscriber::EnvFilter;

/// Dependency targets capped at `warn` unless RUST_LOG says otherwise.
const QUIET_TARGETS: &[&str] = &[
    "html5ever",
    "selectors",
    "hyper",
    "hyper_util",
    "reqwest",
    "rustls",
];

/// Initialise the logging subsystem.
///
/// `debug_flag` is true when the user passed --debug on the CLI.
/// `config_level` is the level from config.toml (if present).
///
/// Priority: RUST_LOG env var > CLI --debug flag > config level > default "info".
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = EnvFilter::new(filter_directives(
        rust_log.as_deref(),
        debug_flag,
        config_level,
    ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .init();

    tracing::debug!(
        app = constants::APP_NAME,
        version = constants::APP_VERSION,
        "Logging initialised"
    );
}

/// Filter directive string for the given inputs.
///
/// RUST_LOG is passed through untouched. Otherwise the chosen level is
/// followed by a `warn` cap for each noisy dependency.
fn filter_directives(
    rust_log: Option<&str>,
    debug_flag: bool,
    config_level: Option<&str>,
) -> String {
    if let Some(directives) = rust_log.filter(|d| !d.trim().is_empty()) {
        return directives.to_string();
    }
    let level = if debug_flag {
        "debug"
    } else {
        config_level.unwrap_or(constants::DEFAULT_LOG_LEVEL)
    };
    let mut directives = level.to_string();
    for target in QUIET_TARGETS {
        directives.push_str(&format!(",{target}=warn"));
    }
    directives
}
