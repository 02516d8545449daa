use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{ai::ports::LlmClient, common::entities::app_errors::CoreError};

const MISTRAL_API_URL: &str = "https://api.mistral.ai/v1/chat/completions";
const TEMPERATURE: f64 = 0.1;
const MAX_TOKENS: u32 = 2048;

#[derive(Debug, Clone)]
pub struct MistralLlmClient {
    api_key: String,
    model_name: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct MistralRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
    max_tokens: u32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
}

#[derive(Debug, Deserialize)]
struct MistralResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: MessageResponse,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    content: String,
}

impl MistralLlmClient {
    pub fn new(api_key: String, model_name: String) -> Self {
        Self {
            api_key,
            model_name,
            client: Client::new(),
        }
    }
}

impl LlmClient for MistralLlmClient {
    async fn generate_json(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        if self.api_key.is_empty() {
            return Err(CoreError::ExternalServiceError(
                "Mistral API key not configured".to_string(),
            ));
        }

        // The chat-completions endpoint enforces JSON mode but not an
        // arbitrary schema, so the schema rides along in the prompt.
        let full_prompt = format!(
            "{prompt}\n\nThe response must conform to this JSON schema:\n{response_schema}"
        );

        let request = MistralRequest {
            model: self.model_name.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: full_prompt,
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            response_format: ResponseFormat {
                format_type: "json_object".to_string(),
            },
        };

        let response = self
            .client
            .post(MISTRAL_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Mistral API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Mistral API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let mistral_response: MistralResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Mistral response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        mistral_response
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}
