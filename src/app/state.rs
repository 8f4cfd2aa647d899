// HeadlineScope - app/state.rs
//
// Dashboard state. Holds the most recent pipeline run plus the UI flags
// that decide which dialogs are open.
// Owned by the eframe::App implementation.

use crate::app::pipeline::{PipelineOutcome, PipelineRun};
use crate::core::analysis::Analysis;

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// URL the dashboard analyses.
    pub source_url: String,

    /// Number of words shown in the top-words table and chart.
    pub top_n: usize,

    /// Most recent completed run (None before the first refresh finishes).
    pub last_run: Option<PipelineRun>,

    /// Whether a refresh is currently in progress.
    pub refresh_in_progress: bool,

    /// Status message for the status bar.
    pub status_message: String,

    /// Whether to show the summary dialog.
    pub show_summary: bool,

    /// Whether to show the About dialog.
    pub show_about: bool,

    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,

    /// Body font size in points.
    pub font_size: f32,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    pub fn new(source_url: String, top_n: usize, debug_mode: bool) -> Self {
        Self {
            source_url,
            top_n,
            last_run: None,
            refresh_in_progress: false,
            status_message: "Ready.".to_string(),
            show_summary: false,
            show_about: false,
            dark_mode: true,
            font_size: crate::util::constants::DEFAULT_FONT_SIZE,
            debug_mode,
        }
    }

    /// Mark a refresh as started.
    pub fn begin_refresh(&mut self) {
        self.refresh_in_progress = true;
        self.status_message = format!("Fetching {}...", self.source_url);
    }

    /// Store a finished run and derive the status line from it.
    pub fn finish_refresh(&mut self, run: PipelineRun) {
        self.refresh_in_progress = false;
        self.status_message = format!(
            "{} (updated {})",
            run.status_message(),
            run.fetched_at
                .with_timezone(&chrono::Local)
                .format("%H:%M:%S")
        );
        self.last_run = Some(run);
    }

    /// Analysis of the last run, if it produced any headlines.
    pub fn analysis(&self) -> Option<&Analysis> {
        self.last_run.as_ref().and_then(PipelineRun::analysis)
    }

    /// Reason to show instead of data, if the last run produced none.
    pub fn empty_reason(&self) -> Option<String> {
        match self.last_run.as_ref().map(|r| &r.outcome) {
            None => None,
            Some(PipelineOutcome::Analysed { .. }) => None,
            Some(PipelineOutcome::FetchFailed(e)) => Some(e.to_string()),
            Some(PipelineOutcome::NoHeadlines { .. }) => {
                Some("The page loaded, but no headlines matched either layout.".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::error::FetchError;
    use chrono::Utc;

    fn run(outcome: PipelineOutcome) -> PipelineRun {
        PipelineRun {
            source_url: "https://example.com/".to_string(),
            fetched_at: Utc::now(),
            outcome,
        }
    }

    #[test]
    fn test_refresh_lifecycle() {
        let mut state = AppState::new("https://example.com/".to_string(), 10, false);
        assert!(state.analysis().is_none());
        assert!(state.empty_reason().is_none());

        state.begin_refresh();
        assert!(state.refresh_in_progress);

        state.finish_refresh(run(PipelineOutcome::FetchFailed(FetchError::Status {
            url: "https://example.com/".to_string(),
            status: 502,
        })));
        assert!(!state.refresh_in_progress);
        assert!(state.status_message.starts_with("Fetch failed"));
        assert!(state.empty_reason().unwrap().contains("502"));
    }

    #[test]
    fn test_analysed_run_has_no_empty_reason() {
        let mut state = AppState::new("u".to_string(), 10, false);
        state.finish_refresh(run(PipelineOutcome::Analysed {
            report: Default::default(),
            analysis: Analysis::default(),
        }));
        assert!(state.analysis().is_some());
        assert!(state.empty_reason().is_none());
    }
}
