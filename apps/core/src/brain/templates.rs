//! Style templates used for deterministic enhancement.

use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Substitution slot for the original prompt text
pub const PROMPT_SLOT: &str = "{prompt}";

const DEFAULT_TEMPLATES: &[(&str, &str)] = &[
    ("professional", "Please provide a professional and detailed response to: {prompt}"),
    ("casual", "Hey! Can you help me with: {prompt}"),
    ("academic", "From an academic perspective, please analyze and explain: {prompt}"),
    ("creative", "Let your creativity flow and explore: {prompt}"),
    ("technical", "Provide a technical and precise explanation for: {prompt}"),
    ("friendly", "In a friendly and approachable way, please help with: {prompt}"),
];

/// A template string with exactly one `{prompt}` slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleTemplate {
    pub style: String,
    template: String,
}

impl StyleTemplate {
    pub fn new(style: impl Into<String>, template: impl Into<String>) -> Result<Self, AppError> {
        let style = style.into();
        let template = template.into();
        let slots = template.matches(PROMPT_SLOT).count();
        if slots != 1 {
            return Err(AppError::Config(format!(
                "Template for style '{}' must contain exactly one {} slot, found {}",
                style, PROMPT_SLOT, slots
            )));
        }
        Ok(Self { style, template })
    }

    pub fn render(&self, prompt: &str) -> String {
        self.template.replacen(PROMPT_SLOT, prompt, 1)
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }
}

/// Ordered, read-only style table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleTemplates {
    templates: Vec<StyleTemplate>,
}

impl Default for StyleTemplates {
    fn default() -> Self {
        let templates = DEFAULT_TEMPLATES
            .iter()
            .map(|(style, template)| StyleTemplate {
                style: style.to_string(),
                template: template.to_string(),
            })
            .collect();
        Self { templates }
    }
}

impl StyleTemplates {
    pub fn from_templates(templates: Vec<StyleTemplate>) -> Result<Self, AppError> {
        if templates.is_empty() {
            return Err(AppError::Config("At least one style template is required".to_string()));
        }
        let mut seen = std::collections::HashSet::new();
        for template in &templates {
            if !seen.insert(template.style.as_str()) {
                return Err(AppError::Config(format!("Duplicate style '{}'", template.style)));
            }
        }
        Ok(Self { templates })
    }

    pub fn get(&self, style: &str) -> Option<&StyleTemplate> {
        self.templates.iter().find(|t| t.style == style)
    }

    /// Style names in table order.
    pub fn names(&self) -> Vec<String> {
        self.templates.iter().map(|t| t.style.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_styles() {
        let templates = StyleTemplates::default();
        assert_eq!(
            templates.names(),
            vec!["professional", "casual", "academic", "creative", "technical", "friendly"]
        );
    }

    #[test]
    fn test_render() {
        let templates = StyleTemplates::default();
        let casual = templates.get("casual").unwrap();
        assert_eq!(casual.render("fix my bike"), "Hey! Can you help me with: fix my bike");
    }

    #[test]
    fn test_render_does_not_expand_slot_in_prompt() {
        let template = StyleTemplate::new("echo", "Say: {prompt}").unwrap();
        assert_eq!(template.render("{prompt}"), "Say: {prompt}");
    }

    #[test]
    fn test_slot_count_enforced() {
        assert!(StyleTemplate::new("none", "no slot here").is_err());
        assert!(StyleTemplate::new("two", "{prompt} and {prompt}").is_err());
    }

    #[test]
    fn test_duplicate_styles_rejected() {
        let a = StyleTemplate::new("a", "A {prompt}").unwrap();
        let result = StyleTemplates::from_templates(vec![a.clone(), a]);
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
