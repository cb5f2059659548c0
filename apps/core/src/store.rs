//! In-memory prompt library.
//!
//! Keeps enriched prompts for listing, editing, sharing and statistics.
//! Handles are cheap to clone and share one underlying map.

use crate::error::AppError;
use crate::models::{EnrichedPrompt, PromptStats, PromptUpdate, SharedPrompt};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

#[derive(Clone, Default)]
pub struct PromptStore {
    prompts: Arc<RwLock<HashMap<String, EnrichedPrompt>>>,
}

impl PromptStore {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Prompts CRUD ---

    pub async fn insert(&self, prompt: EnrichedPrompt) -> EnrichedPrompt {
        let mut prompts = self.prompts.write().await;
        prompts.insert(prompt.id.clone(), prompt.clone());
        info!("Stored prompt {} ({} total)", prompt.id, prompts.len());
        prompt
    }

    pub async fn get(&self, id: &str) -> Result<EnrichedPrompt, AppError> {
        self.prompts
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// Newest first, optionally filtered by category.
    pub async fn list(&self, limit: usize, category: Option<&str>) -> Vec<EnrichedPrompt> {
        let prompts = self.prompts.read().await;
        let mut matching: Vec<EnrichedPrompt> = prompts
            .values()
            .filter(|p| category.map_or(true, |c| p.category == c))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matching.truncate(limit);
        matching
    }

    pub async fn update(&self, id: &str, update: PromptUpdate) -> Result<EnrichedPrompt, AppError> {
        let mut prompts = self.prompts.write().await;
        let prompt = prompts.get_mut(id).ok_or_else(|| not_found(id))?;

        if let Some(enhanced_prompt) = update.enhanced_prompt {
            if enhanced_prompt.trim().is_empty() {
                return Err(AppError::Validation(
                    "Enhanced prompt must not be empty".to_string(),
                ));
            }
            prompt.enhanced_prompt = enhanced_prompt;
        }
        if let Some(category) = update.category {
            prompt.category = category;
        }
        if let Some(style) = update.style {
            prompt.style = style;
        }
        prompt.updated_at = Some(Utc::now());

        Ok(prompt.clone())
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.prompts
            .write()
            .await
            .remove(id)
            .map(|_| info!("Deleted prompt {}", id))
            .ok_or_else(|| not_found(id))
    }

    pub async fn share(&self, id: &str) -> Result<SharedPrompt, AppError> {
        self.get(id).await.map(|p| SharedPrompt::from(&p))
    }

    pub async fn stats(
        &self,
        available_categories: Vec<String>,
        available_styles: Vec<String>,
    ) -> PromptStats {
        let prompts = self.prompts.read().await;

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for prompt in prompts.values() {
            *counts.entry(prompt.category.as_str()).or_insert(0) += 1;
        }
        let mut categories: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(category, count)| (category.to_string(), count))
            .collect();
        categories.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        PromptStats {
            total_prompts: prompts.len(),
            categories,
            available_categories,
            available_styles,
        }
    }
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Prompt {} not found", id))
}
