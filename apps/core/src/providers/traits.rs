use crate::error::AppError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Entity type tags produced by a named-entity recogniser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityKind {
    Person,
    Org,
    /// Geopolitical entity (country, city, state).
    Gpe,
    Product,
    Other,
}

impl EntityKind {
    /// Entity types that contribute keywords.
    pub fn is_keyword_kind(&self) -> bool {
        matches!(
            self,
            EntityKind::Person | EntityKind::Org | EntityKind::Gpe | EntityKind::Product
        )
    }
}

/// A recognised entity span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub kind: EntityKind,
}

impl Entity {
    pub fn new(text: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// Raw output of a sentiment model before normalisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub label: String,
    pub confidence: f32,
}

/// A single enhancement request for a generative model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub system_instruction: String,
    pub user_instruction: String,
    pub max_output_tokens: u32,
    pub temperature: f32,
}

/// Named-entity recognition over raw (not lower-cased) text.
///
/// Returns entities in order of appearance.
pub trait EntityRecognizer: Send + Sync + 'static {
    fn recognize(&self, text: &str) -> Result<Vec<Entity>, AppError>;
}

/// Pluggable sentiment model returning its own label vocabulary.
pub trait SentimentModel: Send + Sync + 'static {
    fn score(&self, text: &str) -> Result<SentimentScore, AppError>;
}

/// Defines the public interface for a generative model backend.
///
/// This trait abstracts the specific implementation of the model, allowing
/// remote APIs and test doubles to be used interchangeably.
#[async_trait]
pub trait PromptGenerator: Send + Sync + 'static {
    /// Generates one completion and returns its raw text.
    async fn complete(&self, request: CompletionRequest) -> Result<String, AppError>;
}
