//! # Brain Module
//!
//! Prompt analysis and enhancement pipeline.
//! Turns raw prompt text into an `EnrichedPrompt`.
//!
//! ## Components
//! - `taxonomy`: category -> trigger keyword table
//! - `categorizer`: substring-count categorisation
//! - `linguistics`: tokenisation and stop words
//! - `keywords`: token + named-entity keyword extraction
//! - `sentiment`: sentiment label normalisation over a pluggable model
//! - `templates`: style -> template table
//! - `enhancer`: AI rewrite with template fallback
//! - `pipeline`: main orchestrator

pub mod categorizer;
pub mod enhancer;
pub mod keywords;
pub mod linguistics;
pub mod pipeline;
pub mod sentiment;
pub mod taxonomy;
pub mod templates;

// Re-export main types for convenience
pub use categorizer::{CategoryScore, Categorizer};
pub use enhancer::{EnhancerMode, PromptEnhancer};
pub use keywords::{KeywordExtractor, KeywordResult, KeywordSource};
pub use pipeline::{PipelineBuilder, PromptPipeline};
pub use sentiment::SentimentClassifier;
pub use taxonomy::{CategoryRule, CategoryTaxonomy, GENERAL_CATEGORY};
pub use templates::{StyleTemplate, StyleTemplates, PROMPT_SLOT};
