//! Pure state transition function
//!
//! Given the same state, context, event and clock reading, `transition`
//! always produces the same result. All I/O is described by the returned
//! effects and carried out by the runtime.

use super::state::{AnswerSource, Message, Mode, Pending, SessionContext, SessionState};
use super::{Effect, Event};
use crate::faq;
use crate::i18n;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: SessionState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: SessionState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Errors that can occur during transition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),
    #[error("Message is empty")]
    EmptyInput,
    #[error("An answer is still on its way")]
    Busy,
    #[error("Completion from a previous session epoch {0}")]
    StaleCompletion(u64),
    #[error("No preset question matches '{0}'")]
    NoMatch(String),
}

/// Pure transition function
pub fn transition(
    state: &SessionState,
    context: &SessionContext,
    event: Event,
    now: DateTime<Utc>,
) -> Result<TransitionResult, TransitionError> {
    match (state.mode, event) {
        // ============================================================
        // Language selection
        // ============================================================
        (Mode::LanguageSelect, Event::SelectLanguage { language }) => {
            let mut next = state.clone();
            next.language = Some(language);
            next.mode = Mode::Menu;
            let id = next_id(&mut next, context);
            let welcome = Message::system(id, i18n::welcome(language), now);
            next.messages.push(welcome.clone());

            Ok(TransitionResult::new(next)
                .with_effect(Effect::notify_message(&welcome))
                .with_effect(Effect::NotifyState))
        }

        // ============================================================
        // Menu <-> FreeText
        // ============================================================
        (Mode::Menu | Mode::FreeText, Event::ChooseFreeText) => {
            Ok(switch_mode(state, Mode::FreeText))
        }

        (Mode::Menu | Mode::FreeText, Event::ChooseMenu) => Ok(switch_mode(state, Mode::Menu)),

        (Mode::FreeText, Event::UpdateDraft { text }) => {
            let mut next = state.clone();
            next.draft = text;
            Ok(TransitionResult::new(next))
        }

        // ============================================================
        // Preset questions
        // ============================================================
        (Mode::Menu, Event::SubmitPreset { question }) => {
            if state.is_pending() {
                return Err(TransitionError::Busy);
            }
            let Some(answer) = state
                .language
                .and_then(|language| faq::resolve_preset(&question, language))
            else {
                return Err(TransitionError::NoMatch(question));
            };

            let mut next = state.clone();
            let user = Message::user(next_id(&mut next, context), question, now);
            next.messages.push(user.clone());
            next.pending = Some(Pending::Preset {
                answer: answer.to_string(),
            });

            Ok(TransitionResult::new(next)
                .with_effect(Effect::notify_message(&user))
                .with_effect(Effect::NotifyState)
                .with_effect(Effect::StartPresetDelay {
                    delay: context.preset_delay,
                    epoch: state.epoch,
                }))
        }

        (_, Event::PresetDelayElapsed { epoch }) => {
            let pending = state.pending.as_ref().filter(|_| epoch == state.epoch);
            let Some(Pending::Preset { answer }) = pending else {
                return Err(TransitionError::StaleCompletion(epoch));
            };
            let mut next = state.clone();
            let id = next_id(&mut next, context);
            let reply = Message::ai(id, answer.clone(), AnswerSource::Faq, now);
            next.messages.push(reply.clone());
            next.pending = None;

            Ok(TransitionResult::new(next)
                .with_effect(Effect::notify_message(&reply))
                .with_effect(Effect::NotifyState))
        }

        // ============================================================
        // Free-text questions
        // ============================================================
        (Mode::FreeText, Event::SubmitFreeText { text }) => {
            let Some(language) = state.language else {
                return Err(TransitionError::InvalidTransition(
                    "free text submitted with no language".to_string(),
                ));
            };
            if text.trim().is_empty() {
                return Err(TransitionError::EmptyInput);
            }
            if state.is_pending() {
                return Err(TransitionError::Busy);
            }

            let mut next = state.clone();
            let user = Message::user(next_id(&mut next, context), text.clone(), now);
            next.messages.push(user.clone());
            next.draft.clear();
            next.pending = Some(Pending::External);

            Ok(TransitionResult::new(next)
                .with_effect(Effect::notify_message(&user))
                .with_effect(Effect::NotifyState)
                .with_effect(Effect::request_answer(state.epoch, text, language)))
        }

        (_, Event::ExternalAnswer { epoch, text }) => {
            ensure_external_pending(state, epoch)?;
            let mut next = state.clone();
            let reply = Message::ai(next_id(&mut next, context), text, AnswerSource::Ai, now);
            next.messages.push(reply.clone());
            next.pending = None;
            next.mode = Mode::Menu;

            Ok(TransitionResult::new(next)
                .with_effect(Effect::notify_message(&reply))
                .with_effect(Effect::NotifyState))
        }

        // No bubble: the failure is logged by the runtime, the turn simply ends
        (_, Event::ExternalFailed { epoch, .. }) => {
            ensure_external_pending(state, epoch)?;
            let mut next = state.clone();
            next.pending = None;
            next.mode = Mode::Menu;

            Ok(TransitionResult::new(next).with_effect(Effect::NotifyState))
        }

        // ============================================================
        // Reset and close
        // ============================================================
        (_, Event::Reset) => Ok(reset(state)),

        (_, Event::Close) => Ok(reset(state).with_effect(Effect::Shutdown)),

        // ============================================================
        // Invalid Transitions
        // ============================================================
        (mode, event) => Err(TransitionError::InvalidTransition(format!(
            "{} is not allowed in {mode:?}",
            event.name()
        ))),
    }
}

// Helper functions

/// Allocate the next message id
fn next_id(state: &mut SessionState, context: &SessionContext) -> String {
    let id = format!("{}-{}", context.session_id, state.next_seq);
    state.next_seq += 1;
    id
}

fn switch_mode(state: &SessionState, mode: Mode) -> TransitionResult {
    let mut next = state.clone();
    next.mode = mode;
    TransitionResult::new(next).with_effect(Effect::NotifyState)
}

fn ensure_external_pending(state: &SessionState, epoch: u64) -> Result<(), TransitionError> {
    if epoch == state.epoch && state.pending == Some(Pending::External) {
        Ok(())
    } else {
        Err(TransitionError::StaleCompletion(epoch))
    }
}

/// Back to language selection. The epoch moves on so any in-flight
/// resolution is recognised as stale when it lands.
fn reset(state: &SessionState) -> TransitionResult {
    let next = SessionState {
        epoch: state.epoch + 1,
        next_seq: state.next_seq,
        ..SessionState::new()
    };
    let result = TransitionResult::new(next);
    let result = if state.is_pending() {
        result.with_effect(Effect::CancelPending)
    } else {
        result
    };
    result.with_effect(Effect::NotifyState)
}
