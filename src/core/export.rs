// HeadlineScope - core/export.rs
//
// CSV and JSON export of analysis results.
// Core layer: writes to any Write trait object; the caller owns the file.

use crate::core::aggregate::WordCount;
use crate::core::analysis::Analysis;
use crate::core::model::{SentimentCounts, SentimentRecord};
use crate::util::error::ExportError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Everything one dashboard refresh showed, in serialisable form.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSnapshot<'a> {
    pub source_url: &'a str,
    pub fetched_at: DateTime<Utc>,
    pub headline_count: usize,
    pub sentiment_counts: SentimentCounts,
    pub mean_polarity: f64,
    pub sentiments: &'a [SentimentRecord],
    pub top_words: Vec<WordCount>,
}

impl<'a> AnalysisSnapshot<'a> {
    pub fn new(
        source_url: &'a str,
        fetched_at: DateTime<Utc>,
        analysis: &'a Analysis,
        top_n: usize,
    ) -> Self {
        Self {
            source_url,
            fetched_at,
            headline_count: analysis.headline_count(),
            sentiment_counts: analysis.sentiment_counts(),
            mean_polarity: analysis.mean_polarity(),
            sentiments: &analysis.sentiments,
            top_words: analysis.top_words(top_n),
        }
    }
}

/// Export the sentiment table to CSV.
///
/// Writes: headline, sentiment, polarity
pub fn export_sentiment_csv<W: Write>(
    records: &[SentimentRecord],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let csv_err = |e| ExportError::Csv {
        path: export_path.to_path_buf(),
        source: e,
    };
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["headline", "sentiment", "polarity"])
        .map_err(csv_err)?;

    for record in records {
        csv_writer
            .write_record([
                record.headline.as_str(),
                record.category.label(),
                format!("{:.4}", record.polarity).as_str(),
            ])
            .map_err(csv_err)?;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(records.len())
}

/// Export a top-N word ranking to CSV.
///
/// Writes: rank, word, frequency
pub fn export_top_words_csv<W: Write>(
    words: &[WordCount],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let csv_err = |e| ExportError::Csv {
        path: export_path.to_path_buf(),
        source: e,
    };
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["rank", "word", "frequency"])
        .map_err(csv_err)?;

    for (rank, row) in words.iter().enumerate() {
        csv_writer
            .write_record([
                (rank + 1).to_string().as_str(),
                row.word.as_str(),
                row.count.to_string().as_str(),
            ])
            .map_err(csv_err)?;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(words.len())
}

/// Export a full snapshot to pretty-printed JSON.
pub fn export_json<W: Write>(
    snapshot: &AnalysisSnapshot<'_>,
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(writer, snapshot).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(snapshot.headline_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analysis::analyze_headlines;
    use crate::core::model::{Headline, HeadlineSet};
    use crate::core::tokenize::StopwordSet;
    use chrono::TimeZone;

    fn sample_analysis() -> Analysis {
        let headlines: HeadlineSet = ["Great news today", "Bad news, \"quoted\", everywhere"]
            .iter()
            .filter_map(|t| Headline::new(t))
            .collect();
        analyze_headlines(&headlines, StopwordSet::english())
    }

    #[test]
    fn test_sentiment_csv_export() {
        let analysis = sample_analysis();
        let mut buf = Vec::new();
        let count =
            export_sentiment_csv(&analysis.sentiments, &mut buf, Path::new("out.csv")).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("headline,sentiment,polarity"));
        assert_eq!(lines.next(), Some("Great news today,Positive,0.8000"));
        // Commas and quotes in a headline are quoted per RFC 4180.
        assert_eq!(
            lines.next(),
            Some("\"Bad news, \"\"quoted\"\", everywhere\",Negative,-0.7000")
        );
    }

    #[test]
    fn test_top_words_csv_export() {
        let analysis = sample_analysis();
        let mut buf = Vec::new();
        let count =
            export_top_words_csv(&analysis.top_words(2), &mut buf, Path::new("w.csv")).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines, vec!["rank,word,frequency", "1,news,2", "2,great,1"]);
    }

    #[test]
    fn test_json_export() {
        let analysis = sample_analysis();
        let fetched_at = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
        let snapshot = AnalysisSnapshot::new("https://example.com/", fetched_at, &analysis, 10);
        let mut buf = Vec::new();
        let count = export_json(&snapshot, &mut buf, Path::new("out.json")).unwrap();
        assert_eq!(count, 2);

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["source_url"], "https://example.com/");
        assert_eq!(value["headline_count"], 2);
        assert_eq!(value["sentiment_counts"]["positive"], 1);
        assert_eq!(value["sentiments"][0]["headline"], "Great news today");
        assert_eq!(value["sentiments"][0]["category"], "Positive");
        assert_eq!(value["top_words"][0]["word"], "news");
        assert!(value["fetched_at"].as_str().unwrap().starts_with("2026-10-16T12:00:00"));
    }
}
