//! Common types for LLM interactions

/// LLM request
#[derive(Debug, Clone)]
pub struct LlmRequest {
    pub system: Vec<SystemContent>,
    pub messages: Vec<LlmMessage>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

impl LlmRequest {
    /// Single-turn request: system instruction plus one user message
    pub fn single_turn(system: impl Into<String>, user_text: impl Into<String>) -> Self {
        Self {
            system: vec![SystemContent::new(system)],
            messages: vec![LlmMessage::user(user_text)],
            max_tokens: None,
            temperature: None,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// All system parts joined in order
    pub fn system_text(&self) -> String {
        self.system
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// System prompt content
#[derive(Debug, Clone)]
pub struct SystemContent {
    pub text: String,
}

impl SystemContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Message in conversation
#[derive(Debug, Clone)]
pub struct LlmMessage {
    pub role: MessageRole,
    pub text: String,
}

impl LlmMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            text: text.into(),
        }
    }
}

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
}

/// LLM response
#[derive(Debug, Clone, Default)]
pub struct LlmResponse {
    /// Concatenated text parts; may be empty
    pub text: String,
    pub end_turn: bool,
    pub usage: Usage,
}

impl LlmResponse {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            end_turn: true,
            usage: Usage::default(),
        }
    }

    /// True when the model produced nothing worth showing
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Usage statistics
#[derive(Debug, Clone, Default)]
pub struct Usage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}
