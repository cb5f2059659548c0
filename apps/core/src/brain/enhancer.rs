//! Prompt enhancement.
//!
//! Two modes:
//! 1. AI-enabled: a generative model rewrites the prompt
//! 2. Template-only: the prompt is wrapped in its style template
//!
//! Every AI failure (transport, API, timeout, empty completion) falls back
//! to the template for that call only; the next call tries the model again.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, warn};

use super::templates::StyleTemplates;
use crate::config::PipelineConfig;
use crate::error::AppError;
use crate::providers::{CompletionRequest, PromptGenerator};

/// Enhancement mode, fixed when the enhancer is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnhancerMode {
    AiEnabled,
    TemplateOnly,
}

pub struct PromptEnhancer {
    templates: Arc<StyleTemplates>,
    generator: Option<Arc<dyn PromptGenerator>>,
    default_style: String,
    max_output_tokens: u32,
    temperature: f32,
    ai_timeout: Duration,
}

impl PromptEnhancer {
    /// Fails if the configured default style has no template.
    pub fn new(
        templates: Arc<StyleTemplates>,
        generator: Option<Arc<dyn PromptGenerator>>,
        config: &PipelineConfig,
    ) -> Result<Self, AppError> {
        if templates.get(&config.default_style).is_none() {
            return Err(AppError::Config(format!(
                "Default style '{}' has no template",
                config.default_style
            )));
        }

        Ok(Self {
            templates,
            generator,
            default_style: config.default_style.clone(),
            max_output_tokens: config.max_output_tokens,
            temperature: config.temperature,
            ai_timeout: config.ai_timeout(),
        })
    }

    pub fn mode(&self) -> EnhancerMode {
        if self.generator.is_some() {
            EnhancerMode::AiEnabled
        } else {
            EnhancerMode::TemplateOnly
        }
    }

    pub fn styles(&self) -> Vec<String> {
        self.templates.names()
    }

    /// Wraps `text` in the template for `style`, or the default style's template
    /// when `style` is unknown.
    pub fn apply_template(&self, text: &str, style: &str) -> String {
        match self
            .templates
            .get(style)
            .or_else(|| self.templates.get(&self.default_style))
        {
            Some(template) => template.render(text),
            // Unreachable: presence of the default style is checked in `new`.
            None => text.to_string(),
        }
    }

    pub fn system_instruction(style: &str, complexity: &str) -> String {
        format!(
            "You are an expert prompt engineer. Enhance the given prompt to be more effective for LLMs.\n\
             Style: {style}\n\
             Complexity: {complexity}\n\
             \n\
             Guidelines:\n\
             - Make it clear and specific\n\
             - Add context when needed\n\
             - Maintain the original intent\n\
             - Optimize for better LLM responses"
        )
    }

    fn build_request(&self, text: &str, style: &str, complexity: &str) -> CompletionRequest {
        CompletionRequest {
            system_instruction: Self::system_instruction(style, complexity),
            user_instruction: format!("Enhance this prompt: {}", text),
            max_output_tokens: self.max_output_tokens,
            temperature: self.temperature,
        }
    }

    async fn enhance_with_ai(
        &self,
        generator: &dyn PromptGenerator,
        text: &str,
        style: &str,
        complexity: &str,
    ) -> Result<String, AppError> {
        let request = self.build_request(text, style, complexity);
        let completion = timeout(self.ai_timeout, generator.complete(request)).await??;
        let trimmed = completion.trim();
        if trimmed.is_empty() {
            return Err(AppError::Provider("Model returned an empty completion".to_string()));
        }
        Ok(trimmed.to_string())
    }

    /// Rewrites `text` for `style` and `complexity`. Never returns an empty string
    /// for non-empty input.
    pub async fn enhance(&self, text: &str, style: &str, complexity: &str) -> String {
        if let Some(generator) = &self.generator {
            match self.enhance_with_ai(generator.as_ref(), text, style, complexity).await {
                Ok(enhanced) => {
                    debug!("AI enhancement produced {} chars", enhanced.len());
                    return enhanced;
                }
                Err(e) => warn!("AI enhancement failed, using template: {}", e),
            }
        }

        self.apply_template(text, style)
    }
}
