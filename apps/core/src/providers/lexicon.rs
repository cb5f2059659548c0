//! Word-list sentiment model.
//!
//! Behaves like a binary POSITIVE/NEGATIVE classifier: it only ever emits
//! those two labels and reports an error when the text carries no
//! sentiment-bearing words at all.

use crate::brain::linguistics::tokenize;
use crate::error::AppError;
use crate::providers::traits::{SentimentModel, SentimentScore};
use std::collections::HashSet;

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "love", "amazing", "wonderful", "happy", "fantastic",
    "awesome", "best", "beautiful", "brilliant", "delightful", "enjoy", "exciting", "glad",
    "helpful", "nice", "perfect", "pleased", "thanks", "thank", "superb", "favorite",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "hate", "horrible", "worst", "sad", "angry", "disappointed",
    "poor", "broken", "annoying", "boring", "fail", "failed", "frustrated", "ugly", "useless",
    "wrong", "worse", "problem", "painful", "upset", "confusing",
];

/// Lexicon-based stand-in for a learned binary sentiment classifier.
pub struct LexiconSentimentModel {
    positive: HashSet<&'static str>,
    negative: HashSet<&'static str>,
}

impl Default for LexiconSentimentModel {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconSentimentModel {
    pub fn new() -> Self {
        Self {
            positive: POSITIVE_WORDS.iter().copied().collect(),
            negative: NEGATIVE_WORDS.iter().copied().collect(),
        }
    }
}

impl SentimentModel for LexiconSentimentModel {
    fn score(&self, text: &str) -> Result<SentimentScore, AppError> {
        let tokens = tokenize(text);
        let positive_hits = tokens
            .iter()
            .filter(|t| self.positive.contains(t.as_str()))
            .count() as f32;
        let negative_hits = tokens
            .iter()
            .filter(|t| self.negative.contains(t.as_str()))
            .count() as f32;
        let total = positive_hits + negative_hits;

        if total == 0.0 {
            return Err(AppError::Provider(
                "no sentiment-bearing terms in text".to_string(),
            ));
        }

        let (label, hits) = if positive_hits >= negative_hits {
            ("POSITIVE", positive_hits)
        } else {
            ("NEGATIVE", negative_hits)
        };

        Ok(SentimentScore {
            label: label.to_string(),
            confidence: hits / total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text() {
        let score = LexiconSentimentModel::new()
            .score("I love this, it is a great idea")
            .unwrap();
        assert_eq!(score.label, "POSITIVE");
        assert!((score.confidence - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_negative_text() {
        let score = LexiconSentimentModel::new()
            .score("This awful bug is a terrible problem, nice try")
            .unwrap();
        assert_eq!(score.label, "NEGATIVE");
        assert!((score.confidence - 0.75).abs() < 0.001);
    }

    #[test]
    fn test_no_signal_is_error() {
        let result = LexiconSentimentModel::new().score("Write a short story about a dragon");
        assert!(matches!(result, Err(AppError::Provider(_))));
    }
}
