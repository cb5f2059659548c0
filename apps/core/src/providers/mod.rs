//! # Providers
//!
//! Capability interfaces consumed by the brain pipeline and the
//! implementations bundled with the crate.
//!
//! - `traits`: `EntityRecognizer`, `SentimentModel`, `PromptGenerator`
//! - `entities`: capitalisation-based named-entity recogniser
//! - `lexicon`: word-list sentiment model
//! - `openai`: OpenAI-compatible chat completion client

pub mod entities;
pub mod lexicon;
pub mod openai;
pub mod traits;

pub use entities::HeuristicEntityRecognizer;
pub use lexicon::LexiconSentimentModel;
pub use openai::OpenAiChatClient;
pub use traits::{
    CompletionRequest, Entity, EntityKind, EntityRecognizer, PromptGenerator, SentimentModel,
    SentimentScore,
};
