//! Keyword-count categorisation.
//!
//! Scores each taxonomy category by how many of its triggers occur as
//! substrings of the lower-cased text. Substring containment means
//! "storytelling" fires the "story" trigger; this can over-match on
//! unrelated words that embed a trigger (e.g. "quarterly" contains "art").

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::taxonomy::{CategoryTaxonomy, GENERAL_CATEGORY};

/// Score of one category for one text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: String,
    pub score: usize,
    pub matched: Vec<String>,
}

pub struct Categorizer {
    taxonomy: Arc<CategoryTaxonomy>,
}

impl Default for Categorizer {
    fn default() -> Self {
        Self::new(Arc::new(CategoryTaxonomy::default()))
    }
}

impl Categorizer {
    pub fn new(taxonomy: Arc<CategoryTaxonomy>) -> Self {
        Self { taxonomy }
    }

    pub fn taxonomy(&self) -> &CategoryTaxonomy {
        &self.taxonomy
    }

    /// Per-category scores in taxonomy order.
    pub fn scores(&self, text: &str) -> Vec<CategoryScore> {
        let text_lower = text.to_lowercase();

        self.taxonomy
            .rules()
            .iter()
            .map(|rule| {
                let matched: Vec<String> = rule
                    .triggers
                    .iter()
                    .filter(|trigger| text_lower.contains(trigger.as_str()))
                    .cloned()
                    .collect();
                CategoryScore {
                    category: rule.name.clone(),
                    score: matched.len(),
                    matched,
                }
            })
            .collect()
    }

    /// Best-scoring category; the first category in table order wins ties.
    /// Returns `general` when nothing matches.
    pub fn categorize(&self, text: &str) -> String {
        let mut best: Option<CategoryScore> = None;

        for candidate in self.scores(text) {
            if candidate.score > best.as_ref().map_or(0, |b| b.score) {
                best = Some(candidate);
            }
        }

        best.map(|b| b.category)
            .unwrap_or_else(|| GENERAL_CATEGORY.to_string())
    }
}
