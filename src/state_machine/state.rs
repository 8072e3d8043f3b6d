//! Chat session state types

use crate::i18n::Language;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Ai,
    System,
}

/// Where an ai answer came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerSource {
    #[serde(rename = "AI")]
    Ai,
    #[serde(rename = "FAQ")]
    Faq,
}

/// One chat bubble. Messages are only ever appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    /// Present only when `sender` is `Ai`
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub source: Option<AnswerSource>,
    pub timestamp: DateTime<Utc>,
}

/// What the action area of the widget shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    LanguageSelect,
    Menu,
    FreeText,
}

/// The single outstanding resolution, if any
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Pending {
    /// Preset answer waiting out the simulated delay
    Preset { answer: String },
    /// Free-text query sent to the model
    External,
}

/// Full state of one chat widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub language: Option<Language>,
    pub messages: Vec<Message>,
    pub mode: Mode,
    pub pending: Option<Pending>,
    /// Free-text input buffer
    #[serde(default)]
    pub draft: String,
    /// Bumped on every reset. Completions tagged with an older epoch are stale.
    pub epoch: u64,
    /// Sequence for message ids; survives resets so ids never repeat
    pub next_seq: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            language: None,
            messages: Vec::new(),
            mode: Mode::LanguageSelect,
            pending: None,
            draft: String::new(),
            epoch: 0,
            next_seq: 0,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// `mode == LanguageSelect` exactly when no language is chosen
    pub fn is_consistent(&self) -> bool {
        (self.mode == Mode::LanguageSelect) == self.language.is_none()
    }
}

/// Fixed per-session inputs to the transition function
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub session_id: String,
    pub preset_delay: Duration,
}

impl SessionContext {
    pub fn new(session_id: impl Into<String>, preset_delay: Duration) -> Self {
        Self {
            session_id: session_id.into(),
            preset_delay,
        }
    }
}

impl Message {
    pub fn user(id: String, text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            text: text.into(),
            sender: Sender::User,
            source: None,
            timestamp,
        }
    }

    pub fn system(id: String, text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            text: text.into(),
            sender: Sender::System,
            source: None,
            timestamp,
        }
    }

    pub fn ai(
        id: String,
        text: impl Into<String>,
        source: AnswerSource,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            sender: Sender::Ai,
            source: Some(source),
            timestamp,
        }
    }
}
