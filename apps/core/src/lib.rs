//! PromptSmith core library.
//!
//! Analyses free-text LLM prompts (category, keywords, sentiment) and
//! rewrites them for a requested style and complexity.

pub mod brain;
pub mod config;
pub mod error;
pub mod models;
pub mod providers;
pub mod store;

#[cfg(test)]
mod tests;

pub use brain::{PipelineBuilder, PromptPipeline};
pub use config::PipelineConfig;
pub use error::AppError;
pub use models::{AnalysisInput, EnrichedPrompt, PromptUpdate, Sentiment, SharedPrompt};
pub use store::PromptStore;
