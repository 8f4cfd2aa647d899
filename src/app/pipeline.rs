// HeadlineScope - app/pipeline.rs
//
// End-to-end pipeline: fetch -> extract -> {tokenize -> aggregate, classify}.
//
// Strictly sequential. A fetch failure short-circuits everything after it;
// the extractor, tokenizer and classifier never see a failed fetch. No
// outcome is fatal: every run ends in a `PipelineRun` the presenter can
// render, and each terminal outcome logs its own event.

use crate::app::fetch::Fetcher;
use crate::core::analysis::{analyze_headlines, Analysis};
use crate::core::export::AnalysisSnapshot;
use crate::core::extract::{self, Extraction, ExtractionReport};
use crate::core::model::HeadlineSet;
use crate::core::tokenize::StopwordSet;
use crate::util::error::FetchError;
use chrono::{DateTime, Utc};
use std::sync::OnceLock;

/// How a pipeline run ended.
#[derive(Debug)]
pub enum PipelineOutcome {
    /// The source could not be retrieved.
    FetchFailed(FetchError),

    /// The page was fetched but neither layout yielded a headline.
    NoHeadlines {
        markup_bytes: usize,
        report: ExtractionReport,
    },

    /// Headlines were found and analysed.
    Analysed {
        report: ExtractionReport,
        analysis: Analysis,
    },
}

/// One completed pipeline invocation.
#[derive(Debug)]
pub struct PipelineRun {
    pub source_url: String,
    pub fetched_at: DateTime<Utc>,
    pub outcome: PipelineOutcome,
}

impl PipelineRun {
    /// The analysis, if headlines were found.
    pub fn analysis(&self) -> Option<&Analysis> {
        match &self.outcome {
            PipelineOutcome::Analysed { analysis, .. } => Some(analysis),
            _ => None,
        }
    }

    pub fn has_data(&self) -> bool {
        self.analysis().is_some()
    }

    /// Serialisable view of this run. Runs without data produce an empty
    /// snapshot rather than an error.
    pub fn snapshot(&self, top_n: usize) -> AnalysisSnapshot<'_> {
        static EMPTY: OnceLock<Analysis> = OnceLock::new();
        let analysis = self
            .analysis()
            .unwrap_or_else(|| EMPTY.get_or_init(Analysis::default));
        AnalysisSnapshot::new(&self.source_url, self.fetched_at, analysis, top_n)
    }

    /// One-line description for status bars and report footers.
    pub fn status_message(&self) -> String {
        match &self.outcome {
            PipelineOutcome::FetchFailed(e) => format!("Fetch failed: {e}"),
            PipelineOutcome::NoHeadlines { markup_bytes, .. } => {
                format!("Page fetched ({markup_bytes} bytes) but no headlines were found")
            }
            PipelineOutcome::Analysed { analysis, .. } => {
                format!("{} headlines analysed", analysis.headline_count())
            }
        }
    }
}

/// Fetch `url` and extract its headlines.
pub fn fetch_headlines<F: Fetcher + ?Sized>(
    fetcher: &F,
    url: &str,
) -> Result<(Extraction, usize), FetchError> {
    let markup = fetcher.fetch(url)?;
    let extraction = extract::extract_with_report(&markup);
    Ok((extraction, markup.len()))
}

/// Headlines currently on `url`, or an empty set if the fetch failed.
///
/// The failure is logged, not returned; callers that need to tell
/// "network failed" from "nothing on the page" use `run_pipeline`.
pub fn get_latest_headlines<F: Fetcher + ?Sized>(fetcher: &F, url: &str) -> HeadlineSet {
    match fetch_headlines(fetcher, url) {
        Ok((extraction, _)) => extraction.headlines,
        Err(e) => {
            tracing::warn!(url, error = %e, "Fetch failed; returning no headlines");
            HeadlineSet::new()
        }
    }
}

/// Run the whole pipeline once against `url`.
pub fn run_pipeline<F: Fetcher + ?Sized>(
    fetcher: &F,
    url: &str,
    stopwords: &StopwordSet,
) -> PipelineRun {
    let fetched_at = Utc::now();

    let outcome = match fetch_headlines(fetcher, url) {
        Err(e) => {
            tracing::warn!(url, error = %e, "Fetch failed");
            PipelineOutcome::FetchFailed(e)
        }
        Ok((extraction, markup_bytes)) if extraction.headlines.is_empty() => {
            let report = extraction.report;
            tracing::warn!(
                url,
                markup_bytes,
                title_line_links = report.title_line_links,
                legacy_links = report.legacy_links,
                more_links_skipped = report.more_links_skipped,
                "Page fetched but no headlines found; layout may have changed"
            );
            PipelineOutcome::NoHeadlines {
                markup_bytes,
                report,
            }
        }
        Ok((extraction, _)) => {
            let analysis = analyze_headlines(&extraction.headlines, stopwords);
            tracing::info!(
                url,
                headlines = analysis.headline_count(),
                tokens = analysis.word_frequencies.total(),
                distinct_words = analysis.word_frequencies.len(),
                duplicates_skipped = extraction.report.duplicates_skipped,
                "Headlines analysed"
            );
            PipelineOutcome::Analysed {
                report: extraction.report,
                analysis,
            }
        }
    };

    PipelineRun {
        source_url: url.to_string(),
        fetched_at,
        outcome,
    }
}
