//! Events that can occur in a chat session

use crate::i18n::Language;

/// Events that trigger state transitions
#[derive(Debug, Clone)]
pub enum Event {
    // User events
    SelectLanguage {
        language: Language,
    },
    ChooseFreeText,
    ChooseMenu,
    UpdateDraft {
        text: String,
    },
    /// A tapped menu question; its answer comes from the session language's table
    SubmitPreset {
        question: String,
    },
    SubmitFreeText {
        text: String,
    },
    Reset,
    Close,

    // Resolution events, tagged with the epoch they were started in
    PresetDelayElapsed {
        epoch: u64,
    },
    ExternalAnswer {
        epoch: u64,
        text: String,
    },
    ExternalFailed {
        epoch: u64,
        message: String,
    },
}

impl Event {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Event::SelectLanguage { .. } => "select_language",
            Event::ChooseFreeText => "choose_free_text",
            Event::ChooseMenu => "choose_menu",
            Event::UpdateDraft { .. } => "update_draft",
            Event::SubmitPreset { .. } => "submit_preset",
            Event::SubmitFreeText { .. } => "submit_free_text",
            Event::Reset => "reset",
            Event::Close => "close",
            Event::PresetDelayElapsed { .. } => "preset_delay_elapsed",
            Event::ExternalAnswer { .. } => "external_answer",
            Event::ExternalFailed { .. } => "external_failed",
        }
    }
}
