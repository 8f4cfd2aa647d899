// HeadlineScope - core/report.rs
//
// Plain-text rendering of an analysis snapshot for headless runs.
// Same sections as the dashboard: sentiment table, sentiment counts,
// top-words table. Charts are drawn as horizontal `#` bars.

use crate::core::export::AnalysisSnapshot;
use crate::core::model::SentimentCategory;
use crate::util::constants;
use std::fmt;

/// Shown in place of every section when a fetch produced nothing.
pub const EMPTY_STATE_MESSAGE: &str = "No headlines found or network error.";

/// Display adapter rendering a snapshot as a text report.
pub struct TextReport<'a> {
    snapshot: &'a AnalysisSnapshot<'a>,
}

impl<'a> TextReport<'a> {
    pub fn new(snapshot: &'a AnalysisSnapshot<'a>) -> Self {
        Self { snapshot }
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.snapshot;
        writeln!(f, "{} {}", constants::APP_NAME, constants::APP_VERSION)?;
        writeln!(f, "Source:  {}", s.source_url)?;
        writeln!(
            f,
            "Fetched: {}",
            s.fetched_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(f)?;

        if s.headline_count == 0 {
            return writeln!(f, "{EMPTY_STATE_MESSAGE}");
        }

        writeln!(f, "Headline Sentiment Analysis ({} headlines)", s.headline_count)?;
        writeln!(f, "{:>4}  {:<9} {:>8}  Headline", "#", "Sentiment", "Polarity")?;
        for (i, record) in s.sentiments.iter().enumerate() {
            writeln!(
                f,
                "{:>4}  {:<9} {:>8.3}  {}",
                i + 1,
                record.category.label(),
                record.polarity,
                truncate(record.headline.as_str(), constants::REPORT_HEADLINE_WIDTH)
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Sentiment Distribution")?;
        let max_count = SentimentCategory::all()
            .iter()
            .map(|&c| s.sentiment_counts.get(c))
            .max()
            .unwrap_or(0);
        for &category in SentimentCategory::all() {
            let count = s.sentiment_counts.get(category);
            writeln!(
                f,
                "  {:<9} {:>4}  {}",
                category.label(),
                count,
                bar(count, max_count)
            )?;
        }
        writeln!(f, "  Mean polarity: {:.3}", s.mean_polarity)?;
        writeln!(f)?;

        writeln!(f, "Top {} Most Common Words", s.top_words.len())?;
        if s.top_words.is_empty() {
            writeln!(f, "  (no words left after stopword filtering)")?;
            return Ok(());
        }
        let word_width = s
            .top_words
            .iter()
            .map(|w| w.word.chars().count())
            .max()
            .unwrap_or(0);
        // top_words is sorted, so the first row carries the largest count.
        let max_count = s.top_words[0].count;
        for (rank, row) in s.top_words.iter().enumerate() {
            writeln!(
                f,
                "{:>4}. {:<width$} {:>4}  {}",
                rank + 1,
                row.word,
                row.count,
                bar(row.count, max_count),
                width = word_width
            )?;
        }
        Ok(())
    }
}

/// Shorten `text` to at most `max_chars` characters, marking the cut with `…`.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// A bar of `#` scaled so `max` fills the report bar width. Non-zero counts
/// always get at least one mark.
fn bar(count: usize, max: usize) -> String {
    if count == 0 || max == 0 {
        return String::new();
    }
    let len = (count * constants::REPORT_BAR_WIDTH / max).max(1);
    "#".repeat(len)
}
