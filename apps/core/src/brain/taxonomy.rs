//! Category taxonomy.
//!
//! An ordered table of category names and their trigger keywords. Order is
//! significant: it decides ties during categorisation.

use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Category returned when no trigger matches.
pub const GENERAL_CATEGORY: &str = "general";

const DEFAULT_CATEGORIES: &[(&str, &[&str])] = &[
    ("creative", &["story", "creative", "write", "imagine", "create", "design", "art"]),
    ("technical", &["code", "program", "develop", "technical", "algorithm", "debug", "api"]),
    ("business", &["business", "marketing", "strategy", "analysis", "report", "proposal"]),
    ("educational", &["explain", "teach", "learn", "tutorial", "guide", "lesson", "study"]),
    ("conversational", &["chat", "talk", "discuss", "conversation", "dialogue", "ask"]),
    ("analytical", &["analyze", "compare", "evaluate", "assess", "review", "examine"]),
];

/// One category and its trigger keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub name: String,
    pub triggers: Vec<String>,
}

/// Ordered, read-only category table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTaxonomy {
    rules: Vec<CategoryRule>,
}

impl Default for CategoryTaxonomy {
    fn default() -> Self {
        let rules = DEFAULT_CATEGORIES
            .iter()
            .map(|(name, triggers)| CategoryRule {
                name: name.to_string(),
                triggers: triggers.iter().map(|t| t.to_string()).collect(),
            })
            .collect();
        Self { rules }
    }
}

impl CategoryTaxonomy {
    /// Builds a custom taxonomy. Triggers are lower-cased; names must be unique and
    /// must not shadow the `general` fallback.
    pub fn from_rules(rules: Vec<CategoryRule>) -> Result<Self, AppError> {
        let mut seen = std::collections::HashSet::new();
        let mut normalized = Vec::with_capacity(rules.len());

        for rule in rules {
            let name = rule.name.trim().to_string();
            if name.is_empty() || name == GENERAL_CATEGORY {
                return Err(AppError::Config(format!("Invalid category name '{}'", rule.name)));
            }
            if !seen.insert(name.clone()) {
                return Err(AppError::Config(format!("Duplicate category '{}'", name)));
            }
            normalized.push(CategoryRule {
                name,
                triggers: rule
                    .triggers
                    .iter()
                    .map(|t| t.trim().to_lowercase())
                    .filter(|t| !t.is_empty())
                    .collect(),
            });
        }

        Ok(Self { rules: normalized })
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// Category names in table order.
    pub fn names(&self) -> Vec<String> {
        self.rules.iter().map(|r| r.name.clone()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.iter().any(|r| r.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        let taxonomy = CategoryTaxonomy::default();
        assert_eq!(
            taxonomy.names(),
            vec!["creative", "technical", "business", "educational", "conversational", "analytical"]
        );
    }

    #[test]
    fn test_custom_rules_normalized() {
        let taxonomy = CategoryTaxonomy::from_rules(vec![CategoryRule {
            name: "cooking".to_string(),
            triggers: vec![" Recipe ".to_string(), "".to_string()],
        }])
        .unwrap();
        assert_eq!(taxonomy.rules()[0].triggers, vec!["recipe"]);
    }

    #[test]
    fn test_general_name_rejected() {
        let result = CategoryTaxonomy::from_rules(vec![CategoryRule {
            name: "general".to_string(),
            triggers: vec!["anything".to_string()],
        }]);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_duplicate_rejected() {
        let rule = CategoryRule {
            name: "a".to_string(),
            triggers: vec![],
        };
        let result = CategoryTaxonomy::from_rules(vec![rule.clone(), rule]);
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
