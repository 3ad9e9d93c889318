//! Finance-news lexicon scorer and sentiment labels.

use serde::{Deserialize, Serialize};

/// Sentiment label assigned to one article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "Positive"),
            Sentiment::Negative => write!(f, "Negative"),
            Sentiment::Neutral => write!(f, "Neutral"),
        }
    }
}

/// Score at or above which text is labeled Positive; the negation marks
/// the Negative boundary. Everything between is Neutral.
const POSITIVE_THRESHOLD: f32 = 0.05;

/// Finance-news word weights.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative. The final score is clamped to `[-1.0, 1.0]`.
pub(crate) const LEXICON: &[(&str, f32)] = &[
    // Positive signals
    ("strong", 0.3),
    ("growth", 0.4),
    ("surged", 0.5),
    ("soars", 0.5),
    ("soared", 0.5),
    ("positive", 0.4),
    ("optimistic", 0.4),
    ("exceeding", 0.4),
    ("exceeded", 0.4),
    ("profit", 0.4),
    ("gains", 0.4),
    ("jump", 0.3),
    ("boost", 0.4),
    ("award", 0.4),
    ("groundbreaking", 0.4),
    ("revolutionary", 0.3),
    ("partnership", 0.3),
    ("innovation", 0.3),
    ("success", 0.4),
    ("record", 0.3),
    ("win", 0.4),
    ("best", 0.5),
    // Negative signals
    ("lawsuit", -0.5),
    ("investigation", -0.4),
    ("scrutiny", -0.4),
    ("decline", -0.4),
    ("dip", -0.3),
    ("disappoint", -0.5),
    ("disappointing", -0.5),
    ("loss", -0.4),
    ("losses", -0.4),
    ("layoffs", -0.5),
    ("volatility", -0.3),
    ("concerns", -0.3),
    ("infringement", -0.4),
    ("recall", -0.6),
    ("fraud", -0.7),
    ("fell", -0.3),
    ("underperformance", -0.4),
    ("weak", -0.4),
    ("short", -0.2),
    ("worst", -0.6),
    ("failed", -0.4),
];

/// Score a text string using the finance-news lexicon.
///
/// Splits text into lowercase words, sums matching weights, and clamps
/// the result to `[-1.0, 1.0]`. Returns `0.0` for empty or unknown text.
#[must_use]
pub fn lexicon_score(text: &str) -> f32 {
    let mut score = 0.0_f32;
    for word in text.split_whitespace() {
        let w = word
            .trim_matches(|c: char| !c.is_alphabetic())
            .to_lowercase();
        for &(lex_word, weight) in LEXICON {
            if w == lex_word {
                score += weight;
                break;
            }
        }
    }
    score.clamp(-1.0, 1.0)
}

/// Classify text into a three-way sentiment label.
///
/// Scores at or above `0.05` are Positive, at or below `-0.05` Negative,
/// and everything in between (including empty text) Neutral.
#[must_use]
pub fn classify_sentiment(text: &str) -> Sentiment {
    let score = lexicon_score(text);
    if score >= POSITIVE_THRESHOLD {
        Sentiment::Positive
    } else if score <= -POSITIVE_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_scores_zero_and_is_neutral() {
        assert_eq!(lexicon_score(""), 0.0);
        assert_eq!(classify_sentiment(""), Sentiment::Neutral);
    }

    #[test]
    fn unknown_text_is_neutral() {
        assert_eq!(classify_sentiment("the quick brown fox"), Sentiment::Neutral);
    }

    #[test]
    fn positive_keywords_classify_positive() {
        assert_eq!(
            classify_sentiment("shares surged on strong growth"),
            Sentiment::Positive
        );
    }

    #[test]
    fn negative_keywords_classify_negative() {
        assert_eq!(
            classify_sentiment("the lawsuit and investigation caused a dip"),
            Sentiment::Negative
        );
    }

    #[test]
    fn mixed_text_can_cancel_to_neutral() {
        // growth (+0.4) + decline (-0.4) = 0.0
        assert_eq!(classify_sentiment("growth then decline"), Sentiment::Neutral);
    }

    #[test]
    fn punctuation_is_stripped_before_matching() {
        assert!(lexicon_score("Profit!") > 0.0);
    }

    #[test]
    fn case_is_ignored() {
        assert!(lexicon_score("LAWSUIT") < 0.0);
    }

    #[test]
    fn score_clamps_to_unit_interval() {
        let stacked = "surged soared growth profit gains boost win best success award";
        assert_eq!(lexicon_score(stacked), 1.0);
        let stacked_neg = "lawsuit recall fraud layoffs disappoint worst decline failed";
        assert_eq!(lexicon_score(stacked_neg), -1.0);
    }

    #[test]
    fn sentiment_serializes_to_label_string() {
        assert_eq!(
            serde_json::to_string(&Sentiment::Positive).unwrap(),
            "\"Positive\""
        );
    }
}
