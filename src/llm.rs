//! LLM provider abstraction
//!
//! Free-text questions are forwarded to a single text-generation provider
//! (Gemini). Everything above this module talks to [`LlmService`].

mod error;
mod gemini;
mod types;

pub use error::{LlmError, LlmErrorKind};
pub use gemini::GeminiService;
pub use types::*;

use crate::config::LlmConfig;
use async_trait::async_trait;
use std::sync::Arc;

/// Common interface for LLM providers
#[async_trait]
pub trait LlmService: Send + Sync {
    /// Make a completion request
    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse, LlmError>;

    /// Get the model ID
    fn model_id(&self) -> &str;
}

/// Build the configured provider, wrapped with logging.
///
/// Returns `None` when no key or gateway is configured.
pub fn service_from_config(config: &LlmConfig) -> Option<Arc<dyn LlmService>> {
    if !config.is_configured() {
        return None;
    }
    match GeminiService::new(config) {
        Ok(service) => Some(Arc::new(LoggingService::new(Arc::new(service)))),
        Err(e) => {
            tracing::error!(error = %e, "Failed to create Gemini service");
            None
        }
    }
}

/// Logging wrapper for LLM services
pub struct LoggingService {
    inner: Arc<dyn LlmService>,
    model_id: String,
}

impl LoggingService {
    pub fn new(inner: Arc<dyn LlmService>) -> Self {
        let model_id = inner.model_id().to_string();
        Self { inner, model_id }
    }
}

#[async_trait]
impl LlmService for LoggingService {
    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse, LlmError> {
        let start = std::time::Instant::now();
        let result = self.inner.complete(request).await;
        let duration = start.elapsed();

        match &result {
            Ok(response) => {
                tracing::info!(
                    model = %self.model_id,
                    duration_ms = %duration.as_millis(),
                    input_tokens = response.usage.input_tokens,
                    output_tokens = response.usage.output_tokens,
                    blank = response.is_blank(),
                    "LLM request completed"
                );
            }
            Err(e) => {
                tracing::error!(
                    model = %self.model_id,
                    duration_ms = %duration.as_millis(),
                    error = %e.message,
                    kind = e.kind.as_str(),
                    "LLM request failed"
                );
            }
        }

        result
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}
