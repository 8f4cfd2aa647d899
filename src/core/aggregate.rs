// HeadlineScope - core/aggregate.rs
//
// Word-frequency aggregation across all headlines of one fetch.
//
// Counting is a plain occurrence tally. Ranking is by count descending; ties
// are broken by first-occurrence order (the word seen earliest in the
// headline sequence ranks first), which makes top-N reproducible for the
// same input.

use crate::core::model::WordToken;
use serde::Serialize;
use std::collections::HashMap;

/// One row of a top-N ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Occurrence counts per word, remembering first-seen order.
#[derive(Debug, Clone, Default)]
pub struct WordFrequencyTable {
    /// word -> (count, first-seen index)
    counts: HashMap<String, (usize, usize)>,
    total: usize,
}

impl WordFrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `token`.
    pub fn add(&mut self, token: &WordToken) {
        let next_index = self.counts.len();
        let entry = self
            .counts
            .entry(token.as_str().to_string())
            .or_insert((0, next_index));
        entry.0 += 1;
        self.total += 1;
    }

    /// Occurrences of `word` (0 if never seen).
    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).map(|&(c, _)| c).unwrap_or(0)
    }

    /// Sum of all counts; equals the number of tokens added.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The `n` most frequent words, count descending, ties by first occurrence.
    ///
    /// Never returns more than `n` rows, and every row has a count of at
    /// least 1.
    pub fn top_n(&self, n: usize) -> Vec<WordCount> {
        let mut rows: Vec<(&str, usize, usize)> = self
            .counts
            .iter()
            .map(|(word, &(count, first_seen))| (word.as_str(), count, first_seen))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
        rows.into_iter()
            .take(n)
            .map(|(word, count, _)| WordCount {
                word: word.to_string(),
                count,
            })
            .collect()
    }

    /// All words, ranked as `top_n` ranks them.
    pub fn ranked(&self) -> Vec<WordCount> {
        self.top_n(self.len())
    }
}

impl Extend<WordToken> for WordFrequencyTable {
    fn extend<I: IntoIterator<Item = WordToken>>(&mut self, iter: I) {
        for token in iter {
            self.add(&token);
        }
    }
}

impl FromIterator<WordToken> for WordFrequencyTable {
    fn from_iter<I: IntoIterator<Item = WordToken>>(iter: I) -> Self {
        let mut table = WordFrequencyTable::new();
        table.extend(iter);
        table
    }
}

/// Tally `tokens` into a fresh table.
pub fn aggregate<I: IntoIterator<Item = WordToken>>(tokens: I) -> WordFrequencyTable {
    tokens.into_iter().collect()
}
