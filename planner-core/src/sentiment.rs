//! Lexicon-based tone classification for spending descriptions.
//!
//! A fixed word-to-valence table (VADER-style ratings on a -4..=4 scale)
//! drives a compound polarity score in [-1, 1]. Initialization is an
//! explicit step: consumers hold an `Option<ToneClassifier>` and report
//! [`Tone::Unavailable`] when the lexicon failed to load, so a missing
//! lexicon disables classification globally without blocking allocation
//! or the other analytics.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Qualitative tone label for a spending description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    #[serde(rename = "positive")]
    Positive,
    #[serde(rename = "negative")]
    Negative,
    #[serde(rename = "neutral")]
    Neutral,
    #[serde(rename = "unavailable")]
    Unavailable,
}

impl Tone {
    /// Short explanation used in reports.
    pub fn hint(&self) -> &'static str {
        match self {
            Tone::Positive => "positive spending (likely good value)",
            Tone::Negative => "negative spending (potential waste)",
            Tone::Neutral => "neutral spending",
            Tone::Unavailable => "tone analysis unavailable",
        }
    }
}

/// Compound score at or above this is positive, at or below its negation
/// is negative.
const COMPOUND_THRESHOLD: f64 = 0.05;

/// Normalization constant for the compound score (matches the VADER alpha).
const NORM_ALPHA: f64 = 15.0;

/// Tokens that flip the valence of the word that follows them.
const NEGATORS: &[&str] = &["not", "no", "never", "without", "hardly", "barely"];

/// Embedded sentiment lexicon: word -> valence on a -4..=4 scale.
///
/// A small subset of the VADER ratings, biased toward words that show up
/// in spending descriptions.
const LEXICON: &[(&str, f64)] = &[
    // positive
    ("good", 1.9),
    ("great", 3.1),
    ("best", 3.2),
    ("better", 1.9),
    ("nice", 1.8),
    ("love", 3.2),
    ("loved", 2.9),
    ("enjoy", 2.2),
    ("enjoyable", 1.9),
    ("happy", 2.7),
    ("excellent", 2.7),
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("wonderful", 2.7),
    ("perfect", 2.7),
    ("worth", 0.9),
    ("worthwhile", 1.4),
    ("valuable", 2.1),
    ("useful", 1.9),
    ("helpful", 1.9),
    ("essential", 1.3),
    ("important", 1.4),
    ("healthy", 1.7),
    ("smart", 1.7),
    ("savings", 1.1),
    ("save", 1.2),
    ("bonus", 2.0),
    ("reward", 2.1),
    ("gift", 1.9),
    ("deal", 1.2),
    ("bargain", 1.6),
    ("cheap", 0.6),
    ("free", 2.3),
    ("fun", 2.3),
    ("treat", 1.6),
    ("comfortable", 1.8),
    ("secure", 1.6),
    ("safe", 1.6),
    // negative
    ("bad", -2.5),
    ("worse", -2.1),
    ("worst", -3.1),
    ("terrible", -2.1),
    ("horrible", -2.5),
    ("awful", -2.0),
    ("waste", -1.8),
    ("wasted", -2.1),
    ("wasteful", -1.7),
    ("useless", -1.8),
    ("pointless", -1.7),
    ("regret", -1.9),
    ("guilt", -1.9),
    ("guilty", -1.9),
    ("impulse", -0.9),
    ("impulsive", -1.1),
    ("expensive", -1.0),
    ("overpriced", -1.9),
    ("costly", -1.1),
    ("debt", -2.0),
    ("broke", -1.9),
    ("stress", -1.9),
    ("stressful", -2.0),
    ("worry", -1.6),
    ("worried", -1.8),
    ("unnecessary", -1.2),
    ("junk", -1.8),
    ("scam", -2.4),
    ("ripoff", -2.2),
    ("lost", -1.3),
    ("loss", -1.5),
    ("late", -0.8),
    ("fee", -0.8),
    ("penalty", -1.7),
];

/// Tone classifier over the embedded lexicon.
///
/// Built once per run via [`ToneClassifier::load`]; the `Option` it
/// returns is the capability handle consumers pass around.
#[derive(Debug, Clone)]
pub struct ToneClassifier {
    lexicon: HashMap<&'static str, f64>,
}

impl ToneClassifier {
    /// Load the embedded lexicon. Returns `None` when no usable lexicon is
    /// available, in which case classification is disabled for the run.
    pub fn load() -> Option<Self> {
        Self::from_entries(LEXICON)
    }

    /// Build a classifier from an explicit valence table. An empty table
    /// counts as a failed load.
    pub fn from_entries(entries: &[(&'static str, f64)]) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        Some(Self {
            lexicon: entries.iter().copied().collect(),
        })
    }

    /// Compound polarity score in [-1, 1].
    ///
    /// Sum of token valences, with a preceding negator flipping the sign
    /// of the next word, normalized by `s / sqrt(s^2 + alpha)`.
    pub fn compound_score(&self, text: &str) -> f64 {
        let mut sum = 0.0;
        let mut negated = false;
        for raw in text.split_whitespace() {
            let token: String = raw
                .chars()
                .filter(|c| c.is_alphanumeric() || *c == '\'')
                .collect::<String>()
                .to_lowercase();
            if token.is_empty() {
                continue;
            }
            if let Some(&valence) = self.lexicon.get(token.as_str()) {
                sum += if negated { -valence } else { valence };
            }
            negated = NEGATORS.contains(&token.as_str());
        }
        if sum == 0.0 {
            return 0.0;
        }
        sum / (sum * sum + NORM_ALPHA).sqrt()
    }

    /// Map a description to a tone label via fixed thresholds.
    pub fn classify(&self, text: &str) -> Tone {
        let score = self.compound_score(text);
        if score >= COMPOUND_THRESHOLD {
            Tone::Positive
        } else if score <= -COMPOUND_THRESHOLD {
            Tone::Negative
        } else {
            Tone::Neutral
        }
    }
}

/// Classify through an optional capability handle.
///
/// `None` means the lexicon never loaded: every call reports
/// [`Tone::Unavailable`], deterministically, for the rest of the run.
pub fn classify_or_unavailable(classifier: Option<&ToneClassifier>, text: &str) -> Tone {
    match classifier {
        Some(c) => c.classify(text),
        None => Tone::Unavailable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> ToneClassifier {
        ToneClassifier::load().unwrap()
    }

    #[test]
    fn positive_negative_and_neutral_descriptions() {
        let c = classifier();
        assert_eq!(c.classify("great deal on healthy groceries"), Tone::Positive);
        assert_eq!(c.classify("impulse buy, total waste of money"), Tone::Negative);
        assert_eq!(c.classify("rent for apartment"), Tone::Neutral);
    }

    #[test]
    fn text_without_sentiment_words_is_neutral() {
        let c = classifier();
        assert_eq!(c.compound_score("monthly electricity bill"), 0.0);
        assert_eq!(c.classify("monthly electricity bill"), Tone::Neutral);
    }

    #[test]
    fn negators_flip_the_following_word() {
        let c = classifier();
        assert!(c.compound_score("not worth it") < 0.0);
        assert!(c.compound_score("worth it") > 0.0);
    }

    #[test]
    fn compound_score_stays_in_unit_interval() {
        let c = classifier();
        let s = c.compound_score("great amazing awesome wonderful perfect love");
        assert!(s > 0.5 && s <= 1.0);
        let n = c.compound_score("terrible horrible awful waste scam");
        assert!(n < -0.5 && n >= -1.0);
    }

    #[test]
    fn failed_load_disables_every_call() {
        let missing = ToneClassifier::from_entries(&[]);
        assert!(missing.is_none());
        assert_eq!(
            classify_or_unavailable(missing.as_ref(), "great deal"),
            Tone::Unavailable
        );
        assert_eq!(
            classify_or_unavailable(missing.as_ref(), "total waste"),
            Tone::Unavailable
        );
    }

    #[test]
    fn punctuation_and_case_do_not_matter() {
        let c = classifier();
        assert_eq!(c.classify("GREAT deal!!!"), c.classify("great deal"));
    }
}
