// HeadlineScope - core/tokenize.rs
//
// Headline normalisation and word tokenisation for frequency analysis.
//
// A headline is lowercased, split into maximal runs of word characters
// (letters, digits, underscore), and filtered: stopwords and single-character
// tokens are dropped. Repeated words are kept once per occurrence.
//
// The stopword set is immutable and injected into the tokenizer; the built-in
// English set is initialised once per process.

use crate::core::model::WordToken;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Built-in stopwords: common English function words plus words that are
/// noise on a news front page ("says", "new", ...). Single letters left over
/// from contractions ("s", "t") are listed too even though the length filter
/// would drop them anyway.
const ENGLISH_STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "is", "are", "was", "were", "be", "been", "being",
    "to", "of", "in", "on", "at", "with", "from", "by", "for", "about", "as", "into", "through",
    "up", "down", "out", "off", "over", "under", "again", "further", "then", "once", "there",
    "when", "where", "why", "how", "all", "any", "both", "each", "few", "more", "most", "other",
    "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s",
    "t", "can", "will", "just", "don", "should", "now", "new", "says", "say", "us", "here",
];

/// Tokens shorter than this (in characters) are discarded.
pub const MIN_TOKEN_CHARS: usize = 2;

// =============================================================================
// StopwordSet
// =============================================================================

/// An immutable set of lowercase words excluded from frequency analysis.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Build a set from arbitrary words. Words are lowercased on the way in
    /// because tokens are compared after lowercasing.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// The built-in English set, initialised on first use.
    pub fn english() -> &'static StopwordSet {
        static ENGLISH: OnceLock<StopwordSet> = OnceLock::new();
        ENGLISH.get_or_init(|| StopwordSet::from_words(ENGLISH_STOPWORDS.iter().copied()))
    }

    /// An empty set; every word of two or more characters survives.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

// =============================================================================
// Tokenizer
// =============================================================================

fn word_pattern() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"\b\w+\b").expect("static regex"))
}

/// Splits headlines into filtered word tokens.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'a> {
    stopwords: &'a StopwordSet,
}

impl<'a> Tokenizer<'a> {
    pub fn new(stopwords: &'a StopwordSet) -> Self {
        Self { stopwords }
    }

    /// Tokenize one headline. Empty input yields no tokens.
    pub fn tokenize(&self, headline: &str) -> Vec<WordToken> {
        let lowered = headline.to_lowercase();
        word_pattern()
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|word| word.chars().count() >= MIN_TOKEN_CHARS)
            .filter(|word| !self.stopwords.contains(word))
            .map(|word| WordToken::new_unchecked(word.to_string()))
            .collect()
    }
}

impl Default for Tokenizer<'static> {
    fn default() -> Self {
        Self::new(StopwordSet::english())
    }
}
