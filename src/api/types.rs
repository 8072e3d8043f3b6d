//! API request and response types

use crate::faq::PresetEntry;
use crate::i18n::{Language, UiStrings};
use crate::state_machine::SessionState;
use serde::{Deserialize, Serialize};

/// Request to pick the session language
#[derive(Debug, Deserialize)]
pub struct LanguageRequest {
    pub language: String,
}

/// Which panel the widget should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestedMode {
    Menu,
    FreeText,
}

/// Request to switch between menu and free text
#[derive(Debug, Deserialize)]
pub struct ModeRequest {
    pub mode: RequestedMode,
}

/// Request carrying free text (draft or submission)
#[derive(Debug, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

/// Request to ask a preset question
#[derive(Debug, Deserialize)]
pub struct PresetRequest {
    pub question: String,
}

/// Localized menu for one language
#[derive(Debug, Serialize)]
pub struct PresetsResponse {
    pub language: Language,
    pub ui: UiStrings,
    pub presets: &'static [PresetEntry],
}

/// Response with a session and its state
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: String,
    pub state: SessionState,
}

/// Response for actions handed to the session runtime
#[derive(Debug, Serialize)]
pub struct QueuedResponse {
    pub queued: bool,
}

/// Response for lifecycle actions
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
