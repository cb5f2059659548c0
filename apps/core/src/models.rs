use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use validator::Validate;

use crate::config::{DEFAULT_COMPLEXITY, DEFAULT_STYLE};

/// Raw request handed to the analysis pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalysisInput {
    /// The prompt text to analyse. Must contain at least one non-whitespace character.
    #[validate(length(min = 1))]
    pub text: String,
    /// Caller-chosen category. Skips categorisation when present and non-empty.
    #[serde(default)]
    pub category_override: Option<String>,
    /// Rewriting tone for the enhancer.
    #[serde(default = "default_style")]
    pub style: String,
    /// Free-form complexity hint forwarded to the generative model.
    #[serde(default = "default_complexity")]
    pub complexity: String,
}

fn default_style() -> String {
    DEFAULT_STYLE.to_string()
}

fn default_complexity() -> String {
    DEFAULT_COMPLEXITY.to_string()
}

impl AnalysisInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category_override: None,
            style: default_style(),
            complexity: default_complexity(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category_override = Some(category.into());
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn with_complexity(mut self, complexity: impl Into<String>) -> Self {
        self.complexity = complexity.into();
        self
    }

    /// The override, if it carries any content.
    pub fn category_override(&self) -> Option<&str> {
        self.category_override
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

/// Normalised sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }

    /// Maps a raw model label onto the three outward labels.
    pub fn from_model_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "positive" => Some(Sentiment::Positive),
            "negative" => Some(Sentiment::Negative),
            "neutral" => Some(Sentiment::Neutral),
            _ => None,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The pipeline's output record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnrichedPrompt {
    /// Unique identifier (UUID v4).
    pub id: String,
    pub original_text: String,
    pub enhanced_prompt: String,
    pub category: String,
    pub style: String,
    pub complexity: String,
    pub keywords: Vec<String>,
    pub sentiment: Sentiment,
    pub created_at: DateTime<Utc>,
    /// Set by the prompt library when a stored record is edited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl EnrichedPrompt {
    pub fn new_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Relative link under which the prompt can be shared.
    pub fn share_path(&self) -> String {
        format!("/share/{}", self.id)
    }
}

/// Partial edit of a stored prompt. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptUpdate {
    pub enhanced_prompt: Option<String>,
    pub category: Option<String>,
    pub style: Option<String>,
}

/// Public view of a prompt exposed through a share link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SharedPrompt {
    pub id: String,
    pub enhanced_prompt: String,
    pub category: String,
    pub style: String,
    pub created_at: DateTime<Utc>,
}

impl From<&EnrichedPrompt> for SharedPrompt {
    fn from(prompt: &EnrichedPrompt) -> Self {
        Self {
            id: prompt.id.clone(),
            enhanced_prompt: prompt.enhanced_prompt.clone(),
            category: prompt.category.clone(),
            style: prompt.style.clone(),
            created_at: prompt.created_at,
        }
    }
}

/// Aggregate counts over the prompt library.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptStats {
    pub total_prompts: usize,
    /// Category name and count, most frequent first.
    pub categories: Vec<(String, usize)>,
    pub available_categories: Vec<String>,
    pub available_styles: Vec<String>,
}
