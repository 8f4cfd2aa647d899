// HeadlineScope - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use serde::Serialize;
use std::collections::HashSet;

// =============================================================================
// Headline
// =============================================================================

/// A single extracted title string from the source page.
///
/// Always trimmed and never empty. Identity is the exact string value
/// (case-sensitive), so "Rust 2.0" and "rust 2.0" are distinct headlines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Headline(String);

impl Headline {
    /// Trim `raw` and wrap it. Returns `None` if nothing is left.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Lets the set answer `contains(&str)` by hash lookup. Hash and Eq are derived
// from the inner `String`, so they agree with `str`'s.
impl std::borrow::Borrow<str> for Headline {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Headline {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Headline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// HeadlineSet
// =============================================================================

/// The unique headlines produced by one extraction pass.
///
/// Backed by an insertion-ordered list so iteration follows first-seen page
/// order and is reproducible for the same markup. Uniqueness is exact-string
/// equality; re-inserting an existing headline is a no-op.
#[derive(Debug, Clone, Default)]
pub struct HeadlineSet {
    items: Vec<Headline>,
    seen: HashSet<Headline>,
}

impl HeadlineSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a headline. Returns `false` if it was already present.
    pub fn insert(&mut self, headline: Headline) -> bool {
        if self.seen.contains(&headline) {
            return false;
        }
        self.seen.insert(headline.clone());
        self.items.push(headline);
        true
    }

    /// Exact-string membership test.
    pub fn contains(&self, text: &str) -> bool {
        self.seen.contains(text)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Headlines in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, Headline> {
        self.items.iter()
    }
}

impl FromIterator<Headline> for HeadlineSet {
    fn from_iter<I: IntoIterator<Item = Headline>>(iter: I) -> Self {
        let mut set = HeadlineSet::new();
        for headline in iter {
            set.insert(headline);
        }
        set
    }
}

impl<'a> IntoIterator for &'a HeadlineSet {
    type Item = &'a Headline;
    type IntoIter = std::slice::Iter<'a, Headline>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// =============================================================================
// Sentiment
// =============================================================================

/// Sentiment bucket a polarity score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SentimentCategory {
    Positive,
    Negative,
    Neutral,
}

impl SentimentCategory {
    /// Returns all variants in display order.
    pub fn all() -> &'static [SentimentCategory] {
        &[
            SentimentCategory::Positive,
            SentimentCategory::Negative,
            SentimentCategory::Neutral,
        ]
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            SentimentCategory::Positive => "Positive",
            SentimentCategory::Negative => "Negative",
            SentimentCategory::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Sentiment of one headline. One record per headline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentRecord {
    pub headline: Headline,

    /// Score in [-1.0, 1.0]; more positive means more positive sentiment.
    pub polarity: f64,

    pub category: SentimentCategory,
}

/// Number of headlines per sentiment category (the bar chart data).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentCounts {
    pub fn from_records(records: &[SentimentRecord]) -> Self {
        let mut counts = Self::default();
        for record in records {
            match record.category {
                SentimentCategory::Positive => counts.positive += 1,
                SentimentCategory::Negative => counts.negative += 1,
                SentimentCategory::Neutral => counts.neutral += 1,
            }
        }
        counts
    }

    pub fn get(&self, category: SentimentCategory) -> usize {
        match category {
            SentimentCategory::Positive => self.positive,
            SentimentCategory::Negative => self.negative,
            SentimentCategory::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

// =============================================================================
// Word tokens
// =============================================================================

/// A lowercase word of at least two characters that is not a stopword.
///
/// Only the tokenizer constructs these, which is what upholds the invariant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct WordToken(String);

impl WordToken {
    pub(crate) fn new_unchecked(word: String) -> Self {
        Self(word)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WordToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headline(s: &str) -> Headline {
        Headline::new(s).unwrap()
    }

    #[test]
    fn test_headline_trims_and_rejects_blank() {
        assert_eq!(headline("  Show HN: a thing \n").as_str(), "Show HN: a thing");
        assert!(Headline::new("").is_none());
        assert!(Headline::new(" \t\n ").is_none());
    }

    #[test]
    fn test_headline_set_keeps_first_seen_order() {
        let set: HeadlineSet = ["b", "a", "b", "c", "a"].into_iter().map(headline).collect();
        let texts: Vec<_> = set.iter().map(Headline::as_str).collect();
        assert_eq!(texts, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_headline_set_is_case_sensitive() {
        let mut set = HeadlineSet::new();
        assert!(set.insert(headline("Rust 2.0")));
        assert!(set.insert(headline("rust 2.0")));
        assert!(!set.insert(headline("Rust 2.0")));
        assert_eq!(set.len(), 2);
        assert!(set.contains("Rust 2.0"));
        assert!(!set.contains("RUST 2.0"));
    }

    #[test]
    fn test_sentiment_counts_from_records() {
        let records = vec![
            SentimentRecord {
                headline: headline("a"),
                polarity: 0.5,
                category: SentimentCategory::Positive,
            },
            SentimentRecord {
                headline: headline("b"),
                polarity: 0.0,
                category: SentimentCategory::Neutral,
            },
            SentimentRecord {
                headline: headline("c"),
                polarity: 0.0,
                category: SentimentCategory::Neutral,
            },
        ];
        let counts = SentimentCounts::from_records(&records);
        assert_eq!(counts.get(SentimentCategory::Positive), 1);
        assert_eq!(counts.get(SentimentCategory::Negative), 0);
        assert_eq!(counts.get(SentimentCategory::Neutral), 2);
        assert_eq!(counts.total(), 3);
    }
}
