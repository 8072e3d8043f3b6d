//! Property-based tests for the state machine
//!
//! These tests drive random event sequences through `transition` and check
//! that the session invariants hold after every step.

use super::state::*;
use super::transition::*;
use super::*;
use crate::faq;
use crate::i18n::Language;
use chrono::{DateTime, Utc};
use proptest::prelude::*;
use std::collections::HashSet;
use std::time::Duration;

// ============================================================================
// Test Helpers
// ============================================================================

fn test_context() -> SessionContext {
    SessionContext::new("prop-session", Duration::from_millis(600))
}

fn now() -> DateTime<Utc> {
    DateTime::<Utc>::default()
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_language() -> impl Strategy<Value = Language> {
    prop_oneof![Just(Language::En), Just(Language::Fr), Just(Language::Ar)]
}

fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z ?]{1,20}",
        Just(String::new()),
        Just("   ".to_string()),
    ]
}

/// Menu questions from every table, plus noise that matches nothing
fn arb_preset_question() -> impl Strategy<Value = String> {
    let known: Vec<String> = Language::ALL
        .iter()
        .flat_map(|lang| faq::presets(*lang))
        .map(|entry| entry.question.to_string())
        .collect();
    prop_oneof![proptest::sample::select(known), "[a-z ]{1,10}"]
}

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        arb_language().prop_map(|language| Event::SelectLanguage { language }),
        Just(Event::ChooseFreeText),
        Just(Event::ChooseMenu),
        arb_text().prop_map(|text| Event::UpdateDraft { text }),
        arb_preset_question().prop_map(|question| Event::SubmitPreset { question }),
        arb_text().prop_map(|text| Event::SubmitFreeText { text }),
        Just(Event::Reset),
        Just(Event::Close),
        (0u64..3).prop_map(|epoch| Event::PresetDelayElapsed { epoch }),
        (0u64..3, "[a-z ]{0,10}").prop_map(|(epoch, text)| Event::ExternalAnswer { epoch, text }),
        (0u64..3).prop_map(|epoch| Event::ExternalFailed {
            epoch,
            message: "boom".to_string()
        }),
    ]
}

fn is_reset(event: &Event) -> bool {
    matches!(event, Event::Reset | Event::Close)
}

fn check_invariants(state: &SessionState) -> Result<(), TestCaseError> {
    prop_assert!(state.is_consistent(), "mode/language mismatch: {:?}", state);
    if state.mode == Mode::LanguageSelect {
        prop_assert!(state.messages.is_empty());
        prop_assert!(!state.is_pending());
    }
    for msg in &state.messages {
        prop_assert_eq!(msg.source.is_some(), msg.sender == Sender::Ai);
    }
    let ids: HashSet<_> = state.messages.iter().map(|m| m.id.as_str()).collect();
    prop_assert_eq!(ids.len(), state.messages.len());
    Ok(())
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_invariants_hold_for_any_sequence(
        events in proptest::collection::vec(arb_event(), 0..40),
    ) {
        let ctx = test_context();
        let mut state = SessionState::new();

        for event in events {
            let reset = is_reset(&event);
            match transition(&state, &ctx, event, now()) {
                Ok(result) => {
                    let next = result.new_state;
                    if reset {
                        prop_assert!(next.messages.is_empty());
                        prop_assert_eq!(next.epoch, state.epoch + 1);
                    } else {
                        // Append-only log
                        prop_assert!(next.messages.len() >= state.messages.len());
                        let kept = &next.messages[..state.messages.len()];
                        prop_assert_eq!(kept, &state.messages[..]);
                        prop_assert!(next.messages.len() - state.messages.len() <= 1);
                    }
                    check_invariants(&next)?;
                    state = next;
                }
                Err(_) => {
                    // A rejected event leaves the state untouched; nothing to check
                }
            }
        }
    }

    #[test]
    fn prop_reset_from_anywhere_is_initial(
        events in proptest::collection::vec(arb_event(), 0..30),
    ) {
        let ctx = test_context();
        let mut state = SessionState::new();
        for event in events {
            if let Ok(result) = transition(&state, &ctx, event, now()) {
                state = result.new_state;
            }
        }

        let result = transition(&state, &ctx, Event::Reset, now()).unwrap();
        prop_assert_eq!(result.new_state.language, None);
        prop_assert!(result.new_state.messages.is_empty());
        prop_assert_eq!(result.new_state.mode, Mode::LanguageSelect);
        prop_assert!(!result.new_state.is_pending());
        prop_assert_eq!(
            result.effects.contains(&Effect::CancelPending),
            state.is_pending()
        );
    }

    #[test]
    fn prop_no_second_resolution_while_pending(
        language in arb_language(),
        first in "[a-z]{1,10}",
        second in "[a-z]{1,10}",
    ) {
        let ctx = test_context();
        let menu = transition(&SessionState::new(), &ctx, Event::SelectLanguage { language }, now())
            .unwrap()
            .new_state;
        let free = transition(&menu, &ctx, Event::ChooseFreeText, now()).unwrap().new_state;
        let asked = transition(&free, &ctx, Event::SubmitFreeText { text: first }, now())
            .unwrap()
            .new_state;

        let again = transition(&asked, &ctx, Event::SubmitFreeText { text: second }, now());
        prop_assert_eq!(again.unwrap_err(), TransitionError::Busy);

        // Switching to the menu does not open a second slot either
        let menu_again = transition(&asked, &ctx, Event::ChooseMenu, now()).unwrap().new_state;
        let preset = transition(
            &menu_again,
            &ctx,
            Event::SubmitPreset { question: faq::presets(language)[0].question.to_string() },
            now(),
        );
        prop_assert_eq!(preset.unwrap_err(), TransitionError::Busy);
    }

    #[test]
    fn prop_preset_appends_user_then_faq(language in arb_language(), index in 0usize..9) {
        let entry = faq::presets(language)[index];
        let question = entry.question.to_string();
        let ctx = test_context();
        let menu = transition(&SessionState::new(), &ctx, Event::SelectLanguage { language }, now())
            .unwrap()
            .new_state;
        prop_assert!(!menu.is_pending());

        let started = transition(
            &menu,
            &ctx,
            Event::SubmitPreset { question: question.clone() },
            now(),
        )
        .unwrap()
        .new_state;
        prop_assert!(started.is_pending());

        let elapsed = Event::PresetDelayElapsed { epoch: menu.epoch };
        let done = transition(&started, &ctx, elapsed, now()).unwrap().new_state;
        prop_assert!(!done.is_pending());

        let added = &done.messages[menu.messages.len()..];
        prop_assert_eq!(added.len(), 2);
        prop_assert_eq!(added[0].sender, Sender::User);
        prop_assert_eq!(&added[0].text, &question);
        prop_assert_eq!(added[1].sender, Sender::Ai);
        prop_assert_eq!(added[1].source, Some(AnswerSource::Faq));
        prop_assert_eq!(added[1].text.as_str(), entry.answer);
    }

    #[test]
    fn prop_unmatched_preset_is_rejected(language in arb_language(), noise in "[xqz]{4,12}") {
        let ctx = test_context();
        let menu = transition(&SessionState::new(), &ctx, Event::SelectLanguage { language }, now())
            .unwrap()
            .new_state;

        let event = Event::SubmitPreset { question: noise.clone() };
        let result = transition(&menu, &ctx, event, now());
        prop_assert_eq!(result.unwrap_err(), TransitionError::NoMatch(noise));
    }
}
