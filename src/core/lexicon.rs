// HeadlineScope - core/lexicon.rs
//
// Built-in English sentiment lexicon.
//
// Three word classes:
//   - scored words: polarity in [-1.0, 1.0]
//   - modifiers: multiply the polarity of the next scored word
//   - negations: flip and dampen the polarity of the next scored word
//
// The table is fixed at compile time and loaded once per process.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

const SCORED_WORDS: &[(&str, f64)] = &[
    // -- positive --
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("beautiful", 0.85),
    ("best", 1.0),
    ("better", 0.5),
    ("boost", 0.4),
    ("brave", 0.6),
    ("breakthrough", 0.6),
    ("brilliant", 0.9),
    ("calm", 0.3),
    ("celebrate", 0.5),
    ("clean", 0.37),
    ("clever", 0.5),
    ("cool", 0.35),
    ("creative", 0.5),
    ("delightful", 1.0),
    ("easy", 0.43),
    ("effective", 0.6),
    ("efficient", 0.5),
    ("elegant", 0.6),
    ("excellent", 1.0),
    ("exciting", 0.3),
    ("fair", 0.7),
    ("fantastic", 0.4),
    ("fast", 0.2),
    ("favorite", 0.5),
    ("fine", 0.42),
    ("free", 0.4),
    ("fresh", 0.3),
    ("fun", 0.3),
    ("funny", 0.25),
    ("glad", 0.5),
    ("good", 0.7),
    ("gorgeous", 0.7),
    ("great", 0.8),
    ("happy", 0.8),
    ("healthy", 0.5),
    ("helpful", 0.5),
    ("impressive", 1.0),
    ("improve", 0.4),
    ("improved", 0.5),
    ("incredible", 0.9),
    ("innovative", 0.5),
    ("interesting", 0.5),
    ("kind", 0.6),
    ("love", 0.5),
    ("loved", 0.7),
    ("lovely", 0.5),
    ("lucky", 0.33),
    ("magnificent", 1.0),
    ("nice", 0.6),
    ("perfect", 1.0),
    ("pleasant", 0.73),
    ("popular", 0.6),
    ("positive", 0.23),
    ("powerful", 0.3),
    ("pretty", 0.25),
    ("promising", 0.5),
    ("proud", 0.8),
    ("reliable", 0.5),
    ("remarkable", 0.75),
    ("robust", 0.4),
    ("safe", 0.5),
    ("secure", 0.4),
    ("smart", 0.21),
    ("solid", 0.3),
    ("stable", 0.3),
    ("strong", 0.43),
    ("success", 0.3),
    ("successful", 0.75),
    ("superb", 1.0),
    ("thrive", 0.6),
    ("useful", 0.3),
    ("valuable", 0.5),
    ("welcome", 0.8),
    ("win", 0.8),
    ("wins", 0.8),
    ("wise", 0.7),
    ("wonderful", 1.0),
    ("worth", 0.3),
    // -- negative --
    ("abysmal", -1.0),
    ("angry", -0.5),
    ("annoying", -0.8),
    ("awful", -1.0),
    ("bad", -0.7),
    ("banned", -0.4),
    ("boring", -1.0),
    ("breach", -0.5),
    ("broken", -0.4),
    ("buggy", -0.5),
    ("catastrophic", -0.9),
    ("crash", -0.5),
    ("crashes", -0.5),
    ("crisis", -0.6),
    ("dangerous", -0.6),
    ("dead", -0.2),
    ("deadly", -0.8),
    ("difficult", -0.5),
    ("dirty", -0.6),
    ("disappointing", -0.6),
    ("disaster", -0.8),
    ("disgusting", -1.0),
    ("dumb", -0.375),
    ("evil", -1.0),
    ("fail", -0.5),
    ("failed", -0.5),
    ("fails", -0.5),
    ("failure", -0.5),
    ("fake", -0.5),
    ("fatal", -0.7),
    ("fear", -0.5),
    ("flawed", -0.5),
    ("fraud", -0.7),
    ("guilty", -0.5),
    ("hacked", -0.6),
    ("hard", -0.29),
    ("harmful", -0.6),
    ("hate", -0.8),
    ("horrible", -1.0),
    ("hostile", -0.5),
    ("illegal", -0.5),
    ("insane", -1.0),
    ("killed", -0.2),
    ("lawsuit", -0.3),
    ("layoffs", -0.5),
    ("leak", -0.4),
    ("leaked", -0.4),
    ("lost", -0.3),
    ("mad", -0.6),
    ("malicious", -0.7),
    ("nasty", -1.0),
    ("outage", -0.5),
    ("painful", -0.7),
    ("poor", -0.4),
    ("ridiculous", -0.33),
    ("risky", -0.4),
    ("sad", -0.5),
    ("scam", -0.8),
    ("scary", -0.5),
    ("severe", -0.5),
    ("sick", -0.7),
    ("slow", -0.3),
    ("stupid", -0.8),
    ("terrible", -1.0),
    ("toxic", -0.6),
    ("ugly", -0.7),
    ("unfair", -0.5),
    ("unsafe", -0.5),
    ("useless", -0.5),
    ("vulnerable", -0.4),
    ("vulnerability", -0.4),
    ("weak", -0.375),
    ("worse", -0.4),
    ("worst", -1.0),
    ("wrong", -0.5),
];

const MODIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.4),
    ("barely", 0.5),
    ("extremely", 1.5),
    ("fairly", 0.9),
    ("highly", 1.3),
    ("incredibly", 1.4),
    ("quite", 1.1),
    ("rather", 0.9),
    ("really", 1.3),
    ("slightly", 0.6),
    ("somewhat", 0.7),
    ("super", 1.3),
    ("totally", 1.3),
    ("very", 1.3),
];

const NEGATIONS: &[&str] = &[
    "cannot", "hardly", "neither", "never", "no", "nobody", "none", "nor", "not", "nothing",
    "without",
];

/// Sentiment vocabulary used by the classifier.
#[derive(Debug, Clone)]
pub struct Lexicon {
    scores: HashMap<&'static str, f64>,
    modifiers: HashMap<&'static str, f64>,
    negations: HashSet<&'static str>,
}

impl Lexicon {
    /// The built-in English lexicon, initialised on first use.
    pub fn builtin() -> &'static Lexicon {
        static BUILTIN: OnceLock<Lexicon> = OnceLock::new();
        BUILTIN.get_or_init(|| Lexicon {
            scores: SCORED_WORDS.iter().copied().collect(),
            modifiers: MODIFIERS.iter().copied().collect(),
            negations: NEGATIONS.iter().copied().collect(),
        })
    }

    /// Polarity of a lowercase word, if it carries sentiment.
    pub fn polarity(&self, word: &str) -> Option<f64> {
        self.scores.get(word).copied()
    }

    /// Intensity multiplier of a lowercase word, if it is a modifier.
    pub fn modifier(&self, word: &str) -> Option<f64> {
        self.modifiers.get(word).copied()
    }

    /// Whether a lowercase word negates what follows ("not", "isn't", ...).
    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word) || word.ends_with("n't")
    }

    /// Number of scored words.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
