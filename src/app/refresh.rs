// HeadlineScope - app/refresh.rs
//
// Refresh lifecycle for the dashboard. Runs one pipeline invocation on a
// background thread and hands the result to the UI thread over an mpsc
// channel, so a slow source never freezes the window.
//
// Architecture:
//   - `RefreshManager` lives on the UI thread; `run_refresh` runs on a worker.
//   - The pipeline itself stays sequential: one worker, one run at a time.
//   - Starting a new refresh abandons the previous receiver; a stale worker
//     finds its channel closed and exits quietly.
//   - There is no cancellation beyond the fetch timeout.

use crate::app::fetch::Fetcher;
use crate::app::pipeline::{self, PipelineRun};
use crate::core::tokenize::StopwordSet;
use std::sync::{mpsc, Arc};

/// Messages sent from the refresh worker to the UI thread.
#[derive(Debug)]
pub enum RefreshProgress {
    /// The worker has started fetching `url`.
    Started { url: String },

    /// The run finished (successfully or not).
    Completed(Box<PipelineRun>),
}

/// Manages a pipeline refresh on a background thread.
pub struct RefreshManager {
    /// Channel receiver for the UI to poll progress messages.
    progress_rx: Option<mpsc::Receiver<RefreshProgress>>,

    fetcher: Arc<dyn Fetcher>,

    stopwords: &'static StopwordSet,
}

impl RefreshManager {
    pub fn new(fetcher: Arc<dyn Fetcher>, stopwords: &'static StopwordSet) -> Self {
        Self {
            progress_rx: None,
            fetcher,
            stopwords,
        }
    }

    /// Start a refresh of `url`. Spawns a worker immediately.
    pub fn start_refresh(&mut self, url: String) {
        let (tx, rx) = mpsc::channel();
        self.progress_rx = Some(rx);

        let fetcher = Arc::clone(&self.fetcher);
        let stopwords = self.stopwords;
        std::thread::spawn(move || {
            run_refresh(fetcher.as_ref(), &url, stopwords, tx);
        });

        tracing::info!("Refresh started");
    }

    /// Whether a worker is still expected to report.
    pub fn is_running(&self) -> bool {
        self.progress_rx.is_some()
    }

    /// Poll for progress messages without blocking. Returns all pending
    /// messages; once `Completed` arrives the manager goes idle.
    pub fn poll_progress(&mut self) -> Vec<RefreshProgress> {
        let mut messages = Vec::new();
        let mut finished = false;
        if let Some(ref rx) = self.progress_rx {
            loop {
                match rx.try_recv() {
                    Ok(msg) => {
                        finished |= matches!(msg, RefreshProgress::Completed(_));
                        messages.push(msg);
                    }
                    Err(mpsc::TryRecvError::Empty) => break,
                    Err(mpsc::TryRecvError::Disconnected) => {
                        // Worker exited without reporting (panicked).
                        finished = true;
                        break;
                    }
                }
            }
        }
        if finished {
            self.progress_rx = None;
        }
        messages
    }
}

/// Worker body: one full pipeline run, reported over `tx`.
fn run_refresh(
    fetcher: &dyn Fetcher,
    url: &str,
    stopwords: &StopwordSet,
    tx: mpsc::Sender<RefreshProgress>,
) {
    if tx
        .send(RefreshProgress::Started {
            url: url.to_string(),
        })
        .is_err()
    {
        return; // Receiver dropped (superseded or UI closed).
    }

    let run = pipeline::run_pipeline(fetcher, url, stopwords);

    // Non-fatal: the UI may have moved on to a newer refresh.
    let _ = tx.send(RefreshProgress::Completed(Box::new(run)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::error::FetchError;
    use std::time::{Duration, Instant};

    struct StaticFetcher(&'static str);

    impl Fetcher for StaticFetcher {
        fn fetch(&self, _url: &str) -> Result<String, FetchError> {
            Ok(self.0.to_string())
        }
    }

    fn wait_for_completion(manager: &mut RefreshManager) -> Vec<RefreshProgress> {
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut all = Vec::new();
        while manager.is_running() && Instant::now() < deadline {
            all.extend(manager.poll_progress());
            std::thread::sleep(Duration::from_millis(5));
        }
        all
    }

    #[test]
    fn test_refresh_reports_start_then_completion() {
        let fetcher: Arc<dyn Fetcher> = Arc::new(StaticFetcher(
            r#"<span class="titleline"><a href="x">Rust compiler news</a></span>"#,
        ));
        let mut manager = RefreshManager::new(fetcher, StopwordSet::english());
        assert!(!manager.is_running());

        manager.start_refresh("https://example.com/".to_string());
        assert!(manager.is_running());

        let messages = wait_for_completion(&mut manager);
        assert!(!manager.is_running());
        assert!(matches!(messages.first(), Some(RefreshProgress::Started { .. })));
        match messages.last() {
            Some(RefreshProgress::Completed(run)) => {
                assert_eq!(run.analysis().map(|a| a.headline_count()), Some(1));
            }
            other => panic!("expected completion, got {other:?}"),
        }
    }
}
