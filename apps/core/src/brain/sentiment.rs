//! Sentiment classification over a pluggable model.
//!
//! The model's own label is lower-cased and mapped onto
//! positive/negative/neutral. A missing model, a model error or an
//! unrecognised label all yield neutral.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::models::Sentiment;
use crate::providers::{SentimentModel, SentimentScore};

#[derive(Default)]
pub struct SentimentClassifier {
    model: Option<Arc<dyn SentimentModel>>,
}

impl SentimentClassifier {
    pub fn new(model: Option<Arc<dyn SentimentModel>>) -> Self {
        Self { model }
    }

    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    fn score(&self, text: &str) -> Result<SentimentScore, AppError> {
        self.model
            .as_ref()
            .ok_or_else(|| AppError::Unavailable("sentiment model".to_string()))?
            .score(text)
    }

    pub fn classify_sentiment(&self, text: &str) -> Sentiment {
        match self.score(text) {
            Ok(score) => match Sentiment::from_model_label(&score.label) {
                Some(sentiment) => {
                    debug!("Sentiment {} ({:.2})", sentiment, score.confidence);
                    sentiment
                }
                None => {
                    warn!("Unrecognised sentiment label '{}', using neutral", score.label);
                    Sentiment::Neutral
                }
            },
            Err(AppError::Unavailable(_)) => Sentiment::Neutral,
            Err(e) => {
                warn!("Sentiment analysis failed, using neutral: {}", e);
                Sentiment::Neutral
            }
        }
    }
}
