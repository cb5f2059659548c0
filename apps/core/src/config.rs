//! Pipeline configuration.
//!
//! Values are read once at startup from the process environment (and an
//! optional `.env` file) and shared read-only afterwards.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;
use validator::Validate;

pub const DEFAULT_STYLE: &str = "professional";
pub const DEFAULT_COMPLEXITY: &str = "medium";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Tunables consumed by the analysis pipeline and the generative client.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PipelineConfig {
    /// Style used when the caller omits one or names an unknown style.
    #[validate(length(min = 1))]
    pub default_style: String,
    /// Complexity hint used when the caller omits one.
    #[validate(length(min = 1))]
    pub default_complexity: String,
    /// Output budget for a single enhancement completion.
    #[validate(range(min = 1, max = 4096))]
    pub max_output_tokens: u32,
    /// Sampling temperature for enhancement. Value between 0.0 and 2.0.
    #[validate(range(min = 0.0, max = 2.0))]
    pub temperature: f32,
    /// Upper bound on the merged keyword list.
    #[validate(range(min = 1))]
    pub max_keywords: usize,
    /// How many stop-word-filtered tokens feed the keyword list.
    pub max_token_keywords: usize,
    /// How many named entities feed the keyword list.
    pub max_entity_keywords: usize,
    /// Deadline for one generative-model round trip.
    #[validate(range(min = 1))]
    pub ai_timeout_secs: u64,
    /// Chat model identifier sent to the completion endpoint.
    #[validate(length(min = 1))]
    pub model: String,
    /// Base URL of an OpenAI-compatible API.
    #[validate(url)]
    pub api_base: String,
    /// Bearer token. AI enhancement is disabled when absent.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            default_style: DEFAULT_STYLE.to_string(),
            default_complexity: DEFAULT_COMPLEXITY.to_string(),
            max_output_tokens: 200,
            temperature: 0.7,
            max_keywords: 8,
            max_token_keywords: 5,
            max_entity_keywords: 3,
            ai_timeout_secs: 30,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: None,
        }
    }
}

impl PipelineConfig {
    /// Loads `.env` (if present) and builds the configuration from the environment.
    pub fn from_env() -> Result<Self, AppError> {
        if let Ok(path) = dotenv::dotenv() {
            info!("Loaded environment from {:?}", path);
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            default_style: lookup("PROMPTSMITH_DEFAULT_STYLE").unwrap_or(defaults.default_style),
            default_complexity: lookup("PROMPTSMITH_DEFAULT_COMPLEXITY")
                .unwrap_or(defaults.default_complexity),
            max_output_tokens: parse_var(&lookup, "PROMPTSMITH_MAX_OUTPUT_TOKENS", defaults.max_output_tokens)?,
            temperature: parse_var(&lookup, "PROMPTSMITH_TEMPERATURE", defaults.temperature)?,
            max_keywords: parse_var(&lookup, "PROMPTSMITH_MAX_KEYWORDS", defaults.max_keywords)?,
            max_token_keywords: parse_var(&lookup, "PROMPTSMITH_MAX_TOKEN_KEYWORDS", defaults.max_token_keywords)?,
            max_entity_keywords: parse_var(&lookup, "PROMPTSMITH_MAX_ENTITY_KEYWORDS", defaults.max_entity_keywords)?,
            ai_timeout_secs: parse_var(&lookup, "PROMPTSMITH_AI_TIMEOUT_SECS", defaults.ai_timeout_secs)?,
            model: lookup("PROMPTSMITH_MODEL").unwrap_or(defaults.model),
            api_base: lookup("OPENAI_BASE_URL").unwrap_or(defaults.api_base),
            api_key: lookup("OPENAI_API_KEY").filter(|key| !key.trim().is_empty()),
        };

        config
            .validate()
            .map_err(|e| AppError::Config(format!("Invalid pipeline configuration: {}", e)))?;
        Ok(config)
    }

    pub fn ai_timeout(&self) -> Duration {
        Duration::from_secs(self.ai_timeout_secs)
    }

    /// Whether a generative client should be constructed at startup.
    pub fn ai_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{} has invalid value '{}': {}", key, raw, e))),
        None => Ok(default),
    }
}
