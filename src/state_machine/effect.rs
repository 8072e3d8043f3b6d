//! Effects produced by state transitions

use super::state::Message;
use crate::i18n::Language;
use std::time::Duration;

/// Effects to be executed after state transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Wait out the simulated preset latency, then report `PresetDelayElapsed`
    StartPresetDelay { delay: Duration, epoch: u64 },

    /// Ask the answer resolver for a free-text reply
    RequestAnswer {
        epoch: u64,
        query: String,
        language: Language,
    },

    /// Abort the outstanding resolution, if any
    CancelPending,

    /// Notify connected clients of an appended message
    NotifyMessage { message: Message },

    /// Notify connected clients of the new state
    NotifyState,

    /// Stop the session runtime
    Shutdown,
}

impl Effect {
    pub fn notify_message(message: &Message) -> Self {
        Effect::NotifyMessage {
            message: message.clone(),
        }
    }

    pub fn request_answer(epoch: u64, query: impl Into<String>, language: Language) -> Self {
        Effect::RequestAnswer {
            epoch,
            query: query.into(),
            language,
        }
    }
}
