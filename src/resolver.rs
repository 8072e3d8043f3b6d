//! Answer resolution
//!
//! Preset questions never reach this module; the session answers them
//! from the static FAQ tables. Free-text questions go to the
//! text-generation model with a language-pinned prompt.

use crate::config::LlmConfig;
use crate::i18n::{self, Language};
use crate::llm::{LlmError, LlmRequest};
use crate::runtime::LlmClient;
use crate::system_prompt::build_system_prompt;
use thiserror::Error;

/// The model call failed. Never shown to the user verbatim.
#[derive(Debug, Clone, Error)]
#[error("external service error: {0}")]
pub struct ExternalServiceError(#[from] pub LlmError);

/// Resolves free-text questions to answer text
pub struct AnswerResolver<L: LlmClient> {
    llm: L,
    temperature: f32,
    max_output_tokens: u32,
}

impl<L: LlmClient> AnswerResolver<L> {
    pub fn new(llm: L, config: &LlmConfig) -> Self {
        Self {
            llm,
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        }
    }

    /// Ask the model. A blank completion becomes the localized fallback line.
    pub async fn generate(
        &self,
        query: &str,
        lang: Language,
    ) -> Result<String, ExternalServiceError> {
        let request = LlmRequest::single_turn(build_system_prompt(lang), query)
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_output_tokens);

        let response = self.llm.complete(&request).await?;
        if response.is_blank() {
            tracing::warn!(language = %lang, "Model returned no text");
            return Ok(i18n::empty_completion(lang).to_string());
        }
        Ok(response.text)
    }

    /// Like [`generate`](Self::generate), but failures become the localized apology
    pub async fn answer_or_apology(&self, query: &str, lang: Language) -> String {
        match self.generate(query, lang).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    kind = e.0.kind.as_str(),
                    language = %lang,
                    "Free-text answer failed, sending apology"
                );
                i18n::apology(lang).to_string()
            }
        }
    }

    pub fn model_id(&self) -> &str {
        self.llm.model_id()
    }
}
