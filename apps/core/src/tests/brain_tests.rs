//! Brain Module Tests
//!
//! Properties of categorisation, keyword extraction, sentiment and
//! enhancement that hold across many inputs.

use crate::brain::{
    Categorizer, CategoryTaxonomy, KeywordExtractor, PromptEnhancer, SentimentClassifier,
    StyleTemplates, GENERAL_CATEGORY,
};
use crate::config::PipelineConfig;
use crate::models::Sentiment;
use crate::providers::{Entity, EntityKind, EntityRecognizer, HeuristicEntityRecognizer};
use crate::AppError;
use std::collections::HashSet;
use std::sync::Arc;

const SAMPLE_PROMPTS: &[&str] = &[
    "Can you help me write a short story about a dragon?",
    "Analyze the quarterly sales report for Acme Corp",
    "Explain recursion to a beginner",
    "Debug this Python API and review the algorithm",
    "hello",
    "Compare London and Paris for a weekend trip with Dr. Ada Lovelace",
    "!!!",
    "Write write WRITE story Story STORY dragon Dragon",
];

#[cfg(test)]
mod categorizer_tests {
    use super::*;

    #[test]
    fn test_every_trigger_maps_to_owning_category() {
        let taxonomy = CategoryTaxonomy::default();
        let categorizer = Categorizer::default();

        for rule in taxonomy.rules() {
            for trigger in &rule.triggers {
                let text = format!("please {} this", trigger);
                let category = categorizer.categorize(&text);
                let owner = taxonomy
                    .rules()
                    .iter()
                    .find(|r| r.name == category)
                    .unwrap_or_else(|| panic!("'{}' returned unknown category {}", text, category));
                assert!(
                    owner.triggers.contains(trigger),
                    "Expected a category containing '{}' for '{}', got {}",
                    trigger,
                    text,
                    category
                );
            }
        }
    }

    #[test]
    fn test_no_trigger_returns_general() {
        let categorizer = Categorizer::default();
        for text in ["hello", "good morning", "¿qué tal?", "12345"] {
            assert_eq!(categorizer.categorize(text), GENERAL_CATEGORY, "for '{}'", text);
        }
    }

    #[test]
    fn test_result_always_in_taxonomy_or_general() {
        let categorizer = Categorizer::default();
        let names = categorizer.taxonomy().names();
        for text in SAMPLE_PROMPTS {
            let category = categorizer.categorize(text);
            assert!(category == GENERAL_CATEGORY || names.contains(&category));
        }
    }

    #[test]
    fn test_deterministic() {
        let categorizer = Categorizer::default();
        for text in SAMPLE_PROMPTS {
            let first = categorizer.categorize(text);
            for _ in 0..5 {
                assert_eq!(categorizer.categorize(text), first);
            }
        }
    }
}

#[cfg(test)]
mod keyword_tests {
    use super::*;

    #[test]
    fn test_at_most_eight_unique_keywords() {
        let recognizer: Arc<dyn EntityRecognizer> = Arc::new(HeuristicEntityRecognizer::new());
        let extractors = [
            KeywordExtractor::default(),
            KeywordExtractor::new(Some(recognizer)),
        ];

        for extractor in &extractors {
            for text in SAMPLE_PROMPTS {
                let keywords = extractor.extract_keywords(text);
                assert!(keywords.len() <= 8, "too many keywords for '{}'", text);
                let unique: HashSet<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
                assert_eq!(unique.len(), keywords.len(), "duplicates for '{}'", text);
            }
        }
    }

    #[test]
    fn test_punctuated_words_become_keywords() {
        let extractor = KeywordExtractor::default();
        assert_eq!(
            extractor.extract_keywords("Describe the dragon's treasure hoard"),
            vec!["describe", "dragon", "treasure", "hoard"]
        );
        assert_eq!(
            extractor.extract_keywords("Write about dragons,knights and castles"),
            vec!["write", "dragons", "knights", "castles"]
        );
    }

    #[test]
    fn test_disabled_ner_keeps_token_subset() {
        let without = KeywordExtractor::default();
        let recognizer: Arc<dyn EntityRecognizer> = Arc::new(HeuristicEntityRecognizer::new());
        let with = KeywordExtractor::new(Some(recognizer));

        for text in SAMPLE_PROMPTS {
            let token_only = without.extract_keywords(text);
            let combined = with.extract_keywords(text);
            assert!(token_only.len() <= 5);
            assert_eq!(&combined[..token_only.len()], token_only.as_slice());
        }
    }

    #[test]
    fn test_entities_from_heuristic_recognizer() {
        let recognizer: Arc<dyn EntityRecognizer> = Arc::new(HeuristicEntityRecognizer::new());
        let extractor = KeywordExtractor::new(Some(recognizer));
        let keywords =
            extractor.extract_keywords("Compare London and Paris for a weekend trip with Dr. Ada Lovelace");
        assert!(keywords.contains(&"london".to_string()));
        assert!(keywords.contains(&"paris".to_string()));
        assert!(keywords.contains(&"ada lovelace".to_string()));
    }

    #[test]
    fn test_other_entities_ignored() {
        struct OtherOnly;
        impl EntityRecognizer for OtherOnly {
            fn recognize(&self, _text: &str) -> Result<Vec<Entity>, AppError> {
                Ok(vec![Entity::new("Monday", EntityKind::Other)])
            }
        }
        let extractor = KeywordExtractor::new(Some(Arc::new(OtherOnly)));
        assert!(!extractor.extract_keywords("see you").contains(&"monday".to_string()));
    }
}

#[cfg(test)]
mod sentiment_tests {
    use super::*;

    #[test]
    fn test_disabled_model_always_neutral() {
        let classifier = SentimentClassifier::default();
        for text in SAMPLE_PROMPTS {
            assert_eq!(classifier.classify_sentiment(text), Sentiment::Neutral);
        }
    }
}

#[cfg(test)]
mod enhancer_tests {
    use super::*;
    use crate::providers::{CompletionRequest, PromptGenerator};
    use async_trait::async_trait;

    struct EmptyGenerator;

    #[async_trait]
    impl PromptGenerator for EmptyGenerator {
        async fn complete(&self, _request: CompletionRequest) -> Result<String, AppError> {
            Ok(String::new())
        }
    }

    #[tokio::test]
    async fn test_never_empty_for_any_style() {
        let templates = Arc::new(StyleTemplates::default());
        let config = PipelineConfig::default();
        let generator: Arc<dyn PromptGenerator> = Arc::new(EmptyGenerator);
        let enhancers = [
            PromptEnhancer::new(templates.clone(), None, &config).unwrap(),
            PromptEnhancer::new(templates.clone(), Some(generator), &config).unwrap(),
        ];

        let mut styles = templates.names();
        styles.extend(["", "pirate", "PROFESSIONAL"].map(String::from));

        for enhancer in &enhancers {
            for style in &styles {
                for text in SAMPLE_PROMPTS {
                    let enhanced = enhancer.enhance(text, style, "medium").await;
                    assert!(!enhanced.is_empty());
                    assert!(enhanced.contains(text));
                }
            }
        }
    }

    #[tokio::test]
    async fn test_casual_template_exact() {
        let enhancer =
            PromptEnhancer::new(Arc::new(StyleTemplates::default()), None, &PipelineConfig::default())
                .unwrap();
        let text = "Can you help me write a short story about a dragon?";
        assert_eq!(
            enhancer.enhance(text, "casual", "medium").await,
            format!("Hey! Can you help me with: {}", text)
        );
    }
}
