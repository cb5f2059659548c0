//! Keyword extraction.
//!
//! Merges the first content tokens of the text with named entities from an
//! optional recogniser, deduplicated case-insensitively and capped.
//! Token-derived keywords come first, entity-derived keywords after.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::warn;

use super::linguistics::content_tokens;
use crate::config::PipelineConfig;
use crate::providers::EntityRecognizer;

/// Minimum token length (tokens must be longer than two characters)
const MIN_TOKEN_LENGTH: usize = 3;

/// Where a keyword came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordSource {
    Token,
    Entity,
}

/// Result of keyword extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordResult {
    /// The keyword, lower-cased
    pub keyword: String,
    pub source: KeywordSource,
}

/// Keyword extractor combining token filtering and NER
pub struct KeywordExtractor {
    recognizer: Option<Arc<dyn EntityRecognizer>>,
    max_keywords: usize,
    max_token_keywords: usize,
    max_entity_keywords: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(None)
    }
}

impl KeywordExtractor {
    /// Create a keyword extractor with default limits (8 total, 5 tokens, 3 entities)
    pub fn new(recognizer: Option<Arc<dyn EntityRecognizer>>) -> Self {
        Self::with_config(recognizer, &PipelineConfig::default())
    }

    pub fn with_config(
        recognizer: Option<Arc<dyn EntityRecognizer>>,
        config: &PipelineConfig,
    ) -> Self {
        Self {
            recognizer,
            max_keywords: config.max_keywords,
            max_token_keywords: config.max_token_keywords,
            max_entity_keywords: config.max_entity_keywords,
        }
    }

    pub fn has_recognizer(&self) -> bool {
        self.recognizer.is_some()
    }

    fn token_keywords(&self, text: &str) -> Vec<String> {
        content_tokens(text, MIN_TOKEN_LENGTH)
            .into_iter()
            .take(self.max_token_keywords)
            .collect()
    }

    /// Entity keywords, or nothing when the recogniser is absent or fails.
    fn entity_keywords(&self, text: &str) -> Vec<String> {
        let Some(recognizer) = &self.recognizer else {
            return vec![];
        };

        match recognizer.recognize(text) {
            Ok(entities) => entities
                .into_iter()
                .filter(|e| e.kind.is_keyword_kind())
                .map(|e| e.text.trim().to_lowercase())
                .filter(|e| !e.is_empty())
                .take(self.max_entity_keywords)
                .collect(),
            Err(e) => {
                warn!("Entity recognition failed, using token keywords only: {}", e);
                vec![]
            }
        }
    }

    /// Extract keywords with their origin
    pub fn extract(&self, text: &str) -> Vec<KeywordResult> {
        let tokens = self
            .token_keywords(text)
            .into_iter()
            .map(|keyword| (keyword, KeywordSource::Token));
        let entities = self
            .entity_keywords(text)
            .into_iter()
            .map(|keyword| (keyword, KeywordSource::Entity));

        let mut seen = HashSet::new();
        tokens
            .chain(entities)
            .filter(|(keyword, _)| seen.insert(keyword.to_lowercase()))
            .take(self.max_keywords)
            .map(|(keyword, source)| KeywordResult { keyword, source })
            .collect()
    }

    /// Extract keywords and return just the strings
    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        self.extract(text).into_iter().map(|k| k.keyword).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::providers::{Entity, EntityKind};

    struct FixedRecognizer(Vec<Entity>);

    impl EntityRecognizer for FixedRecognizer {
        fn recognize(&self, _text: &str) -> Result<Vec<Entity>, AppError> {
            Ok(self.0.clone())
        }
    }

    struct FailingRecognizer;

    impl EntityRecognizer for FailingRecognizer {
        fn recognize(&self, _text: &str) -> Result<Vec<Entity>, AppError> {
            Err(AppError::Provider("model crashed".to_string()))
        }
    }

    #[test]
    fn test_token_keywords_in_order() {
        let extractor = KeywordExtractor::default();
        let keywords = extractor.extract_keywords("Can you help me write a short story about a dragon?");
        assert_eq!(keywords, vec!["help", "write", "short", "story", "dragon"]);
    }

    #[test]
    fn test_token_limit() {
        let extractor = KeywordExtractor::default();
        let keywords =
            extractor.extract_keywords("alpha bravo charlie delta echo foxtrot golf hotel");
        assert_eq!(keywords.len(), 5);
        assert_eq!(keywords[4], "echo");
    }

    #[test]
    fn test_entities_appended_and_filtered() {
        let recognizer = FixedRecognizer(vec![
            Entity::new("Acme Corp", EntityKind::Org),
            Entity::new("Tuesday", EntityKind::Other),
            Entity::new("Paris", EntityKind::Gpe),
            Entity::new("Jane Doe", EntityKind::Person),
            Entity::new("Widget 3", EntityKind::Product),
        ]);
        let extractor = KeywordExtractor::new(Some(Arc::new(recognizer)));
        let results = extractor.extract("Plan the launch");

        let entities: Vec<&str> = results
            .iter()
            .filter(|k| k.source == KeywordSource::Entity)
            .map(|k| k.keyword.as_str())
            .collect();
        assert_eq!(entities, vec!["acme corp", "paris", "jane doe"]);
    }

    #[test]
    fn test_duplicates_removed_case_insensitively() {
        let recognizer = FixedRecognizer(vec![Entity::new("Dragon", EntityKind::Product)]);
        let extractor = KeywordExtractor::new(Some(Arc::new(recognizer)));
        let keywords = extractor.extract_keywords("dragon dragon Dragon story");
        assert_eq!(keywords, vec!["dragon", "story"]);
    }

    #[test]
    fn test_total_cap() {
        let recognizer = FixedRecognizer(vec![
            Entity::new("One Org", EntityKind::Org),
            Entity::new("Two Org", EntityKind::Org),
            Entity::new("Three Org", EntityKind::Org),
        ]);
        let config = PipelineConfig {
            max_keywords: 6,
            ..PipelineConfig::default()
        };
        let extractor = KeywordExtractor::with_config(Some(Arc::new(recognizer)), &config);
        let keywords = extractor.extract_keywords("alpha bravo charlie delta echo");
        assert_eq!(keywords.len(), 6);
        assert_eq!(keywords[5], "one org");
    }

    #[test]
    fn test_failing_recognizer_falls_back_to_tokens() {
        let with_failure = KeywordExtractor::new(Some(Arc::new(FailingRecognizer)));
        let without = KeywordExtractor::default();
        let text = "Summarize the Acme Corp quarterly report";
        assert_eq!(with_failure.extract_keywords(text), without.extract_keywords(text));
    }

    #[test]
    fn test_empty_text() {
        let extractor = KeywordExtractor::default();
        assert!(extractor.extract_keywords("").is_empty());
        assert!(extractor.extract_keywords("the a an is").is_empty());
    }
}
