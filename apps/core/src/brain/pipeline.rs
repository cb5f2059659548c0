//! Prompt Pipeline - Main orchestrator for the Brain module.
//!
//! Coordinates categorisation, keyword extraction, sentiment classification
//! and enhancement into one `EnrichedPrompt`.
//!
//! Each capability (NER, sentiment model, generative model) is injected at
//! construction and may be absent. Absent or failing capabilities degrade to
//! their fallback value; the only error `run` returns is a validation error
//! for empty input.

use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, instrument};
use validator::Validate;

use super::categorizer::Categorizer;
use super::enhancer::{EnhancerMode, PromptEnhancer};
use super::keywords::KeywordExtractor;
use super::sentiment::SentimentClassifier;
use super::taxonomy::CategoryTaxonomy;
use super::templates::StyleTemplates;
use crate::config::PipelineConfig;
use crate::error::AppError;
use crate::models::{AnalysisInput, EnrichedPrompt};
use crate::providers::{
    EntityRecognizer, HeuristicEntityRecognizer, LexiconSentimentModel, OpenAiChatClient,
    PromptGenerator, SentimentModel,
};

/// Collects the tables and capabilities a pipeline is built from.
pub struct PipelineBuilder {
    config: PipelineConfig,
    taxonomy: CategoryTaxonomy,
    templates: StyleTemplates,
    recognizer: Option<Arc<dyn EntityRecognizer>>,
    sentiment_model: Option<Arc<dyn SentimentModel>>,
    generator: Option<Arc<dyn PromptGenerator>>,
}

impl PipelineBuilder {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            taxonomy: CategoryTaxonomy::default(),
            templates: StyleTemplates::default(),
            recognizer: None,
            sentiment_model: None,
            generator: None,
        }
    }

    pub fn taxonomy(mut self, taxonomy: CategoryTaxonomy) -> Self {
        self.taxonomy = taxonomy;
        self
    }

    pub fn templates(mut self, templates: StyleTemplates) -> Self {
        self.templates = templates;
        self
    }

    pub fn entity_recognizer(mut self, recognizer: Arc<dyn EntityRecognizer>) -> Self {
        self.recognizer = Some(recognizer);
        self
    }

    pub fn sentiment_model(mut self, model: Arc<dyn SentimentModel>) -> Self {
        self.sentiment_model = Some(model);
        self
    }

    pub fn generator(mut self, generator: Arc<dyn PromptGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn build(self) -> Result<PromptPipeline, AppError> {
        self.config.validate().map_err(|e| {
            AppError::Config(format!("Invalid pipeline configuration: {}", e))
        })?;

        let enhancer = PromptEnhancer::new(Arc::new(self.templates), self.generator, &self.config)?;

        Ok(PromptPipeline {
            categorizer: Categorizer::new(Arc::new(self.taxonomy)),
            keyword_extractor: KeywordExtractor::with_config(self.recognizer, &self.config),
            sentiment_classifier: SentimentClassifier::new(self.sentiment_model),
            enhancer,
            config: self.config,
        })
    }
}

/// Stateless, re-entrant analysis pipeline. Share it behind an `Arc`.
pub struct PromptPipeline {
    categorizer: Categorizer,
    keyword_extractor: KeywordExtractor,
    sentiment_classifier: SentimentClassifier,
    enhancer: PromptEnhancer,
    config: PipelineConfig,
}

impl PromptPipeline {
    pub fn builder(config: PipelineConfig) -> PipelineBuilder {
        PipelineBuilder::new(config)
    }

    /// Pipeline with the bundled capabilities: heuristic NER, lexicon sentiment,
    /// and the OpenAI client when an API key is configured.
    pub fn from_config(config: PipelineConfig) -> Result<Self, AppError> {
        let generator = OpenAiChatClient::from_config(&config)?;

        let mut builder = Self::builder(config)
            .entity_recognizer(Arc::new(HeuristicEntityRecognizer::new()))
            .sentiment_model(Arc::new(LexiconSentimentModel::new()));
        if let Some(client) = generator {
            builder = builder.generator(Arc::new(client));
        }

        let pipeline = builder.build()?;
        info!(
            "Prompt pipeline ready (enhancer: {:?}, ner: {}, sentiment: {})",
            pipeline.enhancer.mode(),
            pipeline.keyword_extractor.has_recognizer(),
            pipeline.sentiment_classifier.has_model()
        );
        Ok(pipeline)
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn enhancer_mode(&self) -> EnhancerMode {
        self.enhancer.mode()
    }

    /// Category names in taxonomy order
    pub fn categories(&self) -> Vec<String> {
        self.categorizer.taxonomy().names()
    }

    /// Style names in template order
    pub fn styles(&self) -> Vec<String> {
        self.enhancer.styles()
    }

    pub fn categorizer(&self) -> &Categorizer {
        &self.categorizer
    }

    pub fn keyword_extractor(&self) -> &KeywordExtractor {
        &self.keyword_extractor
    }

    pub fn sentiment_classifier(&self) -> &SentimentClassifier {
        &self.sentiment_classifier
    }

    pub fn enhancer(&self) -> &PromptEnhancer {
        &self.enhancer
    }

    fn validate_input(input: &AnalysisInput) -> Result<(), AppError> {
        input.validate()?;
        if input.text.trim().is_empty() {
            return Err(AppError::Validation("Prompt text must not be empty".to_string()));
        }
        Ok(())
    }

    /// Analyse and enhance one prompt.
    #[instrument(skip(self, input), fields(style = %input.style, complexity = %input.complexity))]
    pub async fn run(&self, input: AnalysisInput) -> Result<EnrichedPrompt, AppError> {
        Self::validate_input(&input)?;
        let start = Instant::now();
        let text = input.text.as_str();

        let style = non_blank(&input.style).unwrap_or(&self.config.default_style);
        let complexity = non_blank(&input.complexity).unwrap_or(&self.config.default_complexity);

        // 1. Category (caller override wins)
        let category = match input.category_override() {
            Some(category) => category.to_string(),
            None => self.categorizer.categorize(text),
        };

        // 2. Keywords
        let keywords = self.keyword_extractor.extract_keywords(text);

        // 3. Sentiment
        let sentiment = self.sentiment_classifier.classify_sentiment(text);

        // 4. Enhancement (the only step that may wait on the network)
        let enhanced_prompt = self.enhancer.enhance(text, style, complexity).await;

        let prompt = EnrichedPrompt {
            id: EnrichedPrompt::new_id(),
            original_text: input.text.clone(),
            enhanced_prompt,
            category,
            style: style.to_string(),
            complexity: complexity.to_string(),
            keywords,
            sentiment,
            created_at: Utc::now(),
            updated_at: None,
        };

        info!(
            "Prompt {} analysed in {}ms: category={}, sentiment={}, keywords={}",
            prompt.id,
            start.elapsed().as_millis(),
            prompt.category,
            prompt.sentiment,
            prompt.keywords.len()
        );

        Ok(prompt)
    }
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
