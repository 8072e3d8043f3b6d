//! System prompt construction for free-text questions
//!
//! The persona is fixed; the language directive is appended per request so the
//! model answers in the session's language even if the user writes in another.

use crate::i18n::Language;

/// Persona shared by every free-text request
const BASE_PROMPT: &str = r"You are FanWelcome Assistant, a warm, concise, and protective helper for female football fans visiting Morocco for AFCON 2025.
Your tone is sisterly, welcoming, and informative.
Prioritize safety advice for solo female travelers.
Use simple language.
If asked about laws or health, add a brief disclaimer.
Keep answers culturally appropriate for Morocco (respectful of local customs).
If the user speaks English, answer in English. If French, French. If Arabic, Arabic.
Keep responses short (under 100 words) as users are on mobile.";

/// Directive pinning the reply language
pub fn language_instruction(lang: Language) -> String {
    format!(
        "The user is currently speaking in {}. Respond in that language.",
        lang.english_name()
    )
}

/// Build the full system instruction for a session language
pub fn build_system_prompt(lang: Language) -> String {
    format!("{BASE_PROMPT}\n{}", language_instruction(lang))
}
