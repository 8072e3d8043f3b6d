//! Trait abstractions for runtime I/O
//!
//! These traits enable testing the executor with mock implementations.

use crate::llm::{LlmError, LlmRequest, LlmResponse, LlmService};
use async_trait::async_trait;
use std::sync::Arc;

/// Client for making LLM requests
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Complete an LLM request
    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse, LlmError>;

    /// Get the model ID
    fn model_id(&self) -> &str;
}

// ============================================================================
// Arc implementations for trait objects
// ============================================================================

#[async_trait]
impl<T: LlmClient + ?Sized> LlmClient for Arc<T> {
    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse, LlmError> {
        (**self).complete(request).await
    }

    fn model_id(&self) -> &str {
        (**self).model_id()
    }
}

// ============================================================================
// Production Adapters
// ============================================================================

/// Adapter to use the configured `LlmService` as `LlmClient`.
///
/// With no service configured every request fails with an auth error,
/// which the resolver turns into the localized apology.
#[derive(Clone)]
pub struct ServiceLlmClient {
    service: Option<Arc<dyn LlmService>>,
    model_id: String,
}

impl ServiceLlmClient {
    pub fn new(service: Option<Arc<dyn LlmService>>) -> Self {
        let model_id = service
            .as_ref()
            .map_or_else(|| "none".to_string(), |s| s.model_id().to_string());
        Self { service, model_id }
    }
}

#[async_trait]
impl LlmClient for ServiceLlmClient {
    async fn complete(&self, request: &LlmRequest) -> Result<LlmResponse, LlmError> {
        let service = self
            .service
            .as_ref()
            .ok_or_else(|| LlmError::auth("No LLM configured"))?;
        service.complete(request).await
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}
