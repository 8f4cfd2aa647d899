// HeadlineScope - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Configuration loading (config.toml + CLI overrides)
// 3. Logging initialisation (debug mode support)
// 4. Headless report mode, or eframe GUI launch

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use headlinescope::app;

pub use headlinescope::core;
pub use headlinescope::platform;
pub use headlinescope::ui;
pub use headlinescope::util;

use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// HeadlineScope - front-page headline sentiment and word-frequency dashboard.
///
/// Fetches the current headlines from a news front page, scores each one for
/// sentiment and ranks the most common words.
#[derive(Parser, Debug)]
#[command(name = "HeadlineScope", version, about)]
struct Cli {
    /// Page to analyse (overrides `[source] url`).
    #[arg(short = 'u', long = "url")]
    url: Option<String>,

    /// Fetch timeout in seconds (overrides `[source] timeout_secs`).
    #[arg(short = 't', long = "timeout")]
    timeout: Option<u64>,

    /// Number of top words to show (overrides `[analysis] top_n`).
    #[arg(short = 'n', long = "top")]
    top: Option<usize>,

    /// Directory containing config.toml (defaults to the platform config dir).
    #[arg(short = 'c', long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Print a plain-text report to stdout instead of opening the dashboard.
    #[arg(short = 'r', long = "report")]
    report: bool,

    /// Write a JSON snapshot of the analysis to PATH (implies headless mode).
    #[arg(long = "json", value_name = "PATH")]
    json: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // Resolve platform paths: CLI override > platform default
    let platform_paths = match cli.config_dir.clone() {
        Some(dir) => platform::config::PlatformPaths::with_config_dir(dir),
        None => platform::config::PlatformPaths::resolve(),
    };

    // Config is read before logging so its level can take part in the filter.
    let (mut config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "HeadlineScope starting"
    );
    for warning in &config_warnings {
        tracing::warn!("{}", warning);
    }

    apply_cli_overrides(&cli, &mut config);

    let fetcher = match app::fetch::HttpFetcher::new(app::fetch::FetchConfig {
        timeout: config.fetch_timeout,
        user_agent: config.user_agent.clone(),
        max_body_bytes: util::constants::MAX_BODY_BYTES,
    }) {
        Ok(f) => f,
        Err(e) => {
            let e = util::error::HeadlineScopeError::from(e);
            tracing::error!(error = %e, "Failed to initialise HTTP client");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if cli.report || cli.json.is_some() {
        if let Err(e) = run_headless(&fetcher, &config, cli.report, cli.json.as_deref()) {
            tracing::error!(error = %e, "Headless run failed");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        std::process::exit(0);
    }

    tracing::info!(url = %config.source_url, "Ready to launch GUI");

    let cache = Arc::new(app::cache::CachedFetcher::new(fetcher, config.cache_ttl));

    let mut state = app::state::AppState::new(config.source_url.clone(), config.top_n, cli.debug);
    state.dark_mode = config.dark_mode;
    state.font_size = config.font_size;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    let export_dir = platform_paths.data_dir.clone();
    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            ui::theme::apply(&cc.egui_ctx, state.dark_mode, state.font_size);
            Ok(Box::new(gui::HeadlineScopeApp::new(state, cache, export_dir)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch HeadlineScope GUI: {e}");
        std::process::exit(1);
    }
}

/// Apply CLI flags on top of the validated config. Invalid flag values are
/// reported and ignored, the same way invalid config values are.
fn apply_cli_overrides(cli: &Cli, config: &mut platform::config::AppConfig) {
    use util::constants;

    if let Some(ref url) = cli.url {
        if platform::config::is_valid_source_url(url) {
            config.source_url = url.clone();
        } else {
            tracing::warn!(url = %url, "--url is not an absolute http(s) URL; ignoring");
        }
    }

    if let Some(secs) = cli.timeout {
        if (constants::MIN_FETCH_TIMEOUT_SECS..=constants::MAX_FETCH_TIMEOUT_SECS).contains(&secs) {
            config.fetch_timeout = Duration::from_secs(secs);
        } else {
            tracing::warn!(
                timeout = secs,
                min = constants::MIN_FETCH_TIMEOUT_SECS,
                max = constants::MAX_FETCH_TIMEOUT_SECS,
                "--timeout out of range; ignoring"
            );
        }
    }

    if let Some(n) = cli.top {
        if (constants::MIN_TOP_N..=constants::MAX_TOP_N).contains(&n) {
            config.top_n = n;
        } else {
            tracing::warn!(
                top = n,
                min = constants::MIN_TOP_N,
                max = constants::MAX_TOP_N,
                "--top out of range; ignoring"
            );
        }
    }
}

/// One pipeline run without a window.
///
/// A fetch failure or an empty page is still a successful run: the report
/// shows the empty state. Only failing to write the requested JSON file is
/// an error.
fn run_headless(
    fetcher: &app::fetch::HttpFetcher,
    config: &platform::config::AppConfig,
    print_report: bool,
    json_path: Option<&Path>,
) -> util::error::Result<()> {
    let run = app::pipeline::run_pipeline(
        fetcher,
        &config.source_url,
        core::tokenize::StopwordSet::english(),
    );
    let snapshot = run.snapshot(config.top_n);

    if print_report {
        print!("{}", core::report::TextReport::new(&snapshot));
        if !run.has_data() {
            println!("{}", run.status_message());
        }
    }

    if let Some(path) = json_path {
        let file = std::fs::File::create(path).map_err(|e| util::error::ExportError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        core::export::export_json(&snapshot, file, path)?;
        tracing::info!(path = %path.display(), "Snapshot written");
    }

    Ok(())
}
