// HeadlineScope - core/sentiment.rs
//
// Lexicon-based headline sentiment.
//
// Works on the original headline text, not on frequency tokens: stopwords
// such as "not" and "very" matter here. Scoring walks the words left to
// right; a modifier or negation applies to the next scored word within a
// short window. The headline polarity is the mean of its scored words, and
// 0.0 when none score. Pure and deterministic.

use crate::core::lexicon::Lexicon;
use crate::core::model::{Headline, SentimentCategory, SentimentRecord};
use regex::Regex;
use std::sync::OnceLock;

/// Polarity strictly above this is Positive.
pub const POSITIVE_THRESHOLD: f64 = 0.1;

/// Polarity strictly below this is Negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Multiplier applied to a scored word that follows a negation.
const NEGATION_FACTOR: f64 = -0.5;

/// Words a pending modifier/negation survives before it lapses.
const CONTEXT_WINDOW: usize = 3;

/// Map a polarity score to its category. Both thresholds are exclusive, so
/// exactly 0.1 and exactly -0.1 are Neutral.
pub fn categorize(polarity: f64) -> SentimentCategory {
    if polarity > POSITIVE_THRESHOLD {
        SentimentCategory::Positive
    } else if polarity < NEGATIVE_THRESHOLD {
        SentimentCategory::Negative
    } else {
        SentimentCategory::Neutral
    }
}

fn word_pattern() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"[\w]+(?:'[\w]+)*").expect("static regex"))
}

/// Scores headlines against a lexicon.
#[derive(Debug, Clone, Copy)]
pub struct SentimentClassifier<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> SentimentClassifier<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Polarity of `text` in [-1.0, 1.0].
    pub fn polarity(&self, text: &str) -> f64 {
        // Curly apostrophes are common in scraped titles.
        let lowered = text.to_lowercase().replace('\u{2019}', "'");

        let mut scores: Vec<f64> = Vec::new();
        let mut modifier: Option<(f64, usize)> = None;
        let mut negation: Option<usize> = None;

        for word in word_pattern().find_iter(&lowered).map(|m| m.as_str()) {
            if self.lexicon.is_negation(word) {
                negation = Some(CONTEXT_WINDOW);
                continue;
            }
            if let Some(factor) = self.lexicon.modifier(word) {
                modifier = Some((factor, CONTEXT_WINDOW));
                continue;
            }

            if let Some(base) = self.lexicon.polarity(word) {
                let mut score = base;
                if let Some((factor, _)) = modifier.take() {
                    score *= factor;
                }
                if negation.take().is_some() {
                    score *= NEGATION_FACTOR;
                }
                scores.push(score.clamp(-1.0, 1.0));
                continue;
            }

            // Unscored word: pending context decays.
            modifier = modifier.and_then(|(f, left)| (left > 1).then_some((f, left - 1)));
            negation = negation.and_then(|left| (left > 1).then_some(left - 1));
        }

        if scores.is_empty() {
            return 0.0;
        }
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        mean.clamp(-1.0, 1.0)
    }

    /// Full sentiment record for one headline.
    pub fn classify(&self, headline: &Headline) -> SentimentRecord {
        let polarity = self.polarity(headline.as_str());
        SentimentRecord {
            headline: headline.clone(),
            polarity,
            category: categorize(polarity),
        }
    }
}

impl Default for SentimentClassifier<'static> {
    fn default() -> Self {
        Self::new(Lexicon::builtin())
    }
}
