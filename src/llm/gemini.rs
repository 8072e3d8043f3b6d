//! Google Gemini provider implementation

use super::types::{LlmRequest, LlmResponse, MessageRole, Usage};
use super::{LlmError, LlmService};
use crate::config::LlmConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const DIRECT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini service implementation
pub struct GeminiService {
    client: Client,
    api_key: Option<String>,
    url: String,
    model_id: String,
}

impl GeminiService {
    pub fn new(config: &LlmConfig) -> Result<Self, LlmError> {
        let url = match config.gateway.as_deref() {
            Some(gw) => format!(
                "{}/gemini/v1beta/models/{}:generateContent",
                gw.trim_end_matches('/'),
                config.model
            ),
            None => format!("{DIRECT_BASE_URL}/models/{}:generateContent", config.model),
        };

        // Gateway mode authenticates on our behalf
        let api_key = if config.gateway.is_some() {
            None
        } else {
            Some(
                config
                    .api_key
                    .clone()
                    .ok_or_else(|| LlmError::auth("GEMINI_API_KEY is not set"))?,
            )
        };

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LlmError::unknown(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            url,
            model_id: config.model.clone(),
        })
    }

    fn translate_request(request: &LlmRequest) -> GeminiRequest {
        let system_instruction = if request.system.is_empty() {
            None
        } else {
            Some(GeminiContent {
                role: None,
                parts: vec![GeminiPart {
                    text: request.system_text(),
                }],
            })
        };

        let contents = request
            .messages
            .iter()
            .filter(|msg| !msg.text.is_empty())
            .map(|msg| GeminiContent {
                role: Some(
                    match msg.role {
                        MessageRole::User => "user",
                        MessageRole::Assistant => "model",
                    }
                    .to_string(),
                ),
                parts: vec![GeminiPart {
                    text: msg.text.clone(),
                }],
            })
            .collect();

        let generation_config =
            if request.max_tokens.is_none() && request.temperature.is_none() {
                None
            } else {
                Some(GeminiGenerationConfig {
                    max_output_tokens: request.max_tokens,
                    temperature: request.temperature,
                })
            };

        GeminiRequest {
            contents,
            system_instruction,
            generation_config,
        }
    }

    /// A response with no candidates (e.g. blocked by safety filters) yields
    /// empty text rather than an error.
    fn normalize_response(resp: GeminiResponse) -> LlmResponse {
        let usage = resp
            .usage_metadata
            .map(|u| Usage {
                input_tokens: u64::from(u.prompt_token_count),
                output_tokens: u64::from(u.candidates_token_count),
            })
            .unwrap_or_default();

        let Some(candidate) = resp.candidates.into_iter().next() else {
            return LlmResponse {
                text: String::new(),
                end_turn: true,
                usage,
            };
        };

        let text = candidate
            .content
            .map(|c| {
                c.parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        LlmResponse {
            text,
            end_turn: candidate.finish_reason.as_deref() == Some("STOP"),
            usage,
        }
    }
}

#[async_trait]
impl LlmService for GeminiService {
    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse, LlmError> {
        let gemini_request = Self::translate_request(request);

        let mut builder = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json");
        if let Some(key) = &self.api_key {
            builder = builder.header("x-goog-api-key", key);
        }

        let response = builder
            .json(&gemini_request)
            .send()
            .await
            .map_err(|e| LlmError::from_transport(&e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LlmError::network(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            let message = serde_json::from_str::<GeminiErrorResponse>(&body)
                .map_or(body, |r| r.error.message);
            return Err(LlmError::from_status(status, &message));
        }

        let gemini_response: GeminiResponse = serde_json::from_str(&body).map_err(|e| {
            LlmError::unknown(format!("Failed to parse response: {e} - body: {body}"))
        })?;

        Ok(Self::normalize_response(gemini_response))
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}

// Gemini API types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GeminiGenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    usage_metadata: Option<GeminiUsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiUsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorResponse {
    error: GeminiError,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}
