use crate::config::PipelineConfig;
use crate::error::AppError;
use crate::providers::traits::{CompletionRequest, PromptGenerator};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, instrument};
use url::Url;

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
///
/// Cheap to clone; clones share the underlying connection pool, so many
/// pipeline runs can wait on their own requests concurrently.
#[derive(Clone)]
pub struct OpenAiChatClient {
    client: Client,
    endpoint: Url,
    model: String,
    api_key: String,
}

impl OpenAiChatClient {
    /// Creates a client against `api_base` (e.g. `https://api.openai.com/v1`).
    pub fn new(api_base: &str, api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, AppError> {
        let base = if api_base.ends_with('/') {
            api_base.to_string()
        } else {
            format!("{}/", api_base)
        };
        let endpoint = Url::parse(&base)?.join("chat/completions")?;

        Ok(Self {
            client: Client::new(),
            endpoint,
            model: model.into(),
            api_key: api_key.into(),
        })
    }

    /// Builds a client from configuration, or `None` when no API key is configured.
    pub fn from_config(config: &PipelineConfig) -> Result<Option<Self>, AppError> {
        match &config.api_key {
            Some(key) => Self::new(&config.api_base, key.clone(), config.model.clone()).map(Some),
            None => Ok(None),
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn build_request(&self, payload: &serde_json::Value) -> Result<reqwest::RequestBuilder, AppError> {
        let mut headers = HeaderMap::new();
        let auth_value = HeaderValue::from_str(&format!("Bearer {}", self.api_key))
            .map_err(|e| AppError::Config(format!("Invalid API key header: {}", e)))?;
        headers.insert(AUTHORIZATION, auth_value);

        Ok(self
            .client
            .post(self.endpoint.clone())
            .headers(headers)
            .json(payload))
    }
}

#[async_trait]
impl PromptGenerator for OpenAiChatClient {
    #[instrument(skip(self, request), fields(model = %self.model))]
    async fn complete(&self, request: CompletionRequest) -> Result<String, AppError> {
        let payload = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": request.system_instruction },
                { "role": "user", "content": request.user_instruction },
            ],
            "max_tokens": request.max_output_tokens,
            "temperature": request.temperature,
        });

        let res = self.build_request(&payload)?.send().await?;
        let status = res.status();

        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(AppError::Provider(format!(
                "Completion request failed with status {}: {}",
                status, body
            )));
        }

        let body = res.text().await?;
        let parsed: ChatCompletionResponse = serde_json::from_str(&body)?;
        debug!("Received {} completion choice(s)", parsed.choices.len());

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AppError::Provider("Completion response contained no content".to_string()))
    }
}
