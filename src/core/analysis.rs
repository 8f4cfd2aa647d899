// HeadlineScope - core/analysis.rs
//
// Per-fetch analysis: one sentiment record per headline plus a word-frequency
// table over all headlines. Both result sets follow the headline order of the
// input set.

use crate::core::aggregate::{WordCount, WordFrequencyTable};
use crate::core::model::{HeadlineSet, SentimentCounts, SentimentRecord};
use crate::core::sentiment::SentimentClassifier;
use crate::core::tokenize::{StopwordSet, Tokenizer};

/// Both result sets of one analysis run.
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    pub word_frequencies: WordFrequencyTable,
    pub sentiments: Vec<SentimentRecord>,
}

impl Analysis {
    pub fn headline_count(&self) -> usize {
        self.sentiments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentiments.is_empty()
    }

    pub fn sentiment_counts(&self) -> SentimentCounts {
        SentimentCounts::from_records(&self.sentiments)
    }

    pub fn top_words(&self, n: usize) -> Vec<WordCount> {
        self.word_frequencies.top_n(n)
    }

    /// Mean polarity across headlines (0.0 when there are none).
    pub fn mean_polarity(&self) -> f64 {
        if self.sentiments.is_empty() {
            return 0.0;
        }
        self.sentiments.iter().map(|r| r.polarity).sum::<f64>() / self.sentiments.len() as f64
    }
}

/// Analyse `headlines` with the built-in lexicon, filtering frequency tokens
/// through `stopwords`.
pub fn analyze_headlines(headlines: &HeadlineSet, stopwords: &StopwordSet) -> Analysis {
    analyze_with(
        headlines,
        &Tokenizer::new(stopwords),
        &SentimentClassifier::default(),
    )
}

/// Analyse `headlines` with explicit collaborators.
pub fn analyze_with(
    headlines: &HeadlineSet,
    tokenizer: &Tokenizer<'_>,
    classifier: &SentimentClassifier<'_>,
) -> Analysis {
    let mut word_frequencies = WordFrequencyTable::new();
    let mut sentiments = Vec::with_capacity(headlines.len());

    for headline in headlines {
        word_frequencies.extend(tokenizer.tokenize(headline.as_str()));
        sentiments.push(classifier.classify(headline));
    }

    tracing::debug!(
        headlines = sentiments.len(),
        tokens = word_frequencies.total(),
        distinct_words = word_frequencies.len(),
        "Headline analysis complete"
    );

    Analysis {
        word_frequencies,
        sentiments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{Headline, SentimentCategory};

    fn set(texts: &[&str]) -> HeadlineSet {
        texts.iter().filter_map(|t| Headline::new(t)).collect()
    }

    #[test]
    fn test_one_record_per_headline_in_order() {
        let headlines = set(&["Bad news everywhere", "Great news today"]);
        let analysis = analyze_headlines(&headlines, StopwordSet::english());

        assert_eq!(analysis.headline_count(), 2);
        assert_eq!(analysis.sentiments[0].headline.as_str(), "Bad news everywhere");
        assert_eq!(analysis.sentiments[0].category, SentimentCategory::Negative);
        assert_eq!(analysis.sentiments[1].category, SentimentCategory::Positive);

        let counts = analysis.sentiment_counts();
        assert_eq!((counts.positive, counts.negative, counts.neutral), (1, 1, 0));
    }

    #[test]
    fn test_word_table_spans_all_headlines() {
        let headlines = set(&["Bad news everywhere", "Great news today"]);
        let analysis = analyze_headlines(&headlines, StopwordSet::english());

        assert_eq!(analysis.word_frequencies.count("news"), 2);
        assert_eq!(analysis.top_words(1)[0].word, "news");
        // bad news everywhere great news today
        assert_eq!(analysis.word_frequencies.total(), 6);
    }

    #[test]
    fn test_sentiment_ignores_stopword_filtering() {
        // "not" is a stopword for frequency purposes but still negates.
        let headlines = set(&["Not good"]);
        let analysis = analyze_headlines(&headlines, StopwordSet::english());
        assert_eq!(analysis.word_frequencies.count("not"), 0);
        assert!(analysis.sentiments[0].polarity < 0.0);
    }

    #[test]
    fn test_empty_set_yields_empty_analysis() {
        let analysis = analyze_headlines(&HeadlineSet::new(), StopwordSet::english());
        assert!(analysis.is_empty());
        assert!(analysis.word_frequencies.is_empty());
        assert_eq!(analysis.mean_polarity(), 0.0);
    }
}
