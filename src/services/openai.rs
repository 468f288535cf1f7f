use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::services::generator::{RecommendationGenerator, RECOMMENDATION_SCHEMA};

const COMPLETIONS_PATH: &str = "/v1/chat/completions";
const SCHEMA_NAME: &str = "book_recommendations";

/// Live generation backend over an OpenAI-style chat completions endpoint.
/// Sends one request per call; retrying is the caller's decision.
#[derive(Debug)]
pub struct OpenAiGenerator {
    client: Client,
    api_key: String,
    model: String,
    completions_url: String,
}

impl OpenAiGenerator {
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config.openai_api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(ApiError::ConfigurationError(
                "APP_OPENAI_API_KEY must be set when mock data is disabled".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.generation_timeout_secs))
            // Connection timeout separate from request timeout
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .pool_max_idle_per_host(10)
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .https_only(true)
            .build()
            .map_err(|e| {
                ApiError::InternalError(format!("Failed to create HTTP client: {}", e))
            })?;

        let completions_url = format!(
            "{}{}",
            config.openai_base_url.trim_end_matches('/'),
            COMPLETIONS_PATH
        );

        info!(
            "Generation client ready: model {}, endpoint {}, timeout {}s",
            config.generation_model, completions_url, config.generation_timeout_secs
        );

        Ok(Self {
            client,
            api_key,
            model: config.generation_model.clone(),
            completions_url,
        })
    }
}

#[async_trait]
impl RecommendationGenerator for OpenAiGenerator {
    async fn generate(&self, instruction: &str) -> Result<Value> {
        #[derive(Deserialize)]
        struct ChatCompletionResponse {
            choices: Vec<ChatChoice>,
        }

        #[derive(Deserialize)]
        struct ChatChoice {
            message: ChatMessage,
        }

        #[derive(Deserialize)]
        struct ChatMessage {
            content: Option<String>,
        }

        let request = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": instruction }],
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": SCHEMA_NAME,
                    "strict": true,
                    "schema": RECOMMENDATION_SCHEMA.clone(),
                },
            },
        });

        debug!(
            "Requesting completion from {} ({} instruction chars)",
            self.completions_url,
            instruction.len()
        );

        let response = self
            .client
            .post(&self.completions_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                ApiError::GenerationFailure(format!("Failed to reach generation endpoint: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            if status.as_u16() == 401 || status.as_u16() == 403 {
                return Err(ApiError::GenerationFailure(
                    "Authentication failed. Please check your OpenAI API key.".to_string(),
                ));
            } else if status.as_u16() == 429 {
                return Err(ApiError::GenerationFailure(
                    "Rate limit exceeded at the generation endpoint.".to_string(),
                ));
            }

            return Err(ApiError::GenerationFailure(format!(
                "Generation endpoint returned non-success status: {} - {}",
                status, text
            )));
        }

        let envelope: ChatCompletionResponse = response.json().await.map_err(|e| {
            ApiError::GenerationFailure(format!("Failed to read completion envelope: {}", e))
        })?;

        let content = envelope
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                ApiError::GenerationFailure("Completion carried no content".to_string())
            })?;

        // Content that is not JSON at all counts as a malformed structured
        // response, not a transport failure.
        let payload: Value = serde_json::from_str(&content)?;

        Ok(payload)
    }
}
