//! Session languages and the fixed strings shown for each of them

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Language a chat session runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Fr,
    Ar,
}

impl Language {
    #[allow(dead_code)] // Used by tests
    pub const ALL: [Language; 3] = [Language::En, Language::Fr, Language::Ar];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::Ar => "ar",
        }
    }

    /// Name of the language in the language itself, for the picker
    pub fn native_name(self) -> &'static str {
        pick(self, "English", "Français", "العربية")
    }

    /// English name, used when pinning the model's reply language
    pub fn english_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Fr => "French",
            Language::Ar => "Arabic",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Ar)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Error)]
#[error("Unsupported language: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" | "english" => Ok(Language::En),
            "fr" | "fr-fr" | "fr-ma" | "french" | "français" => Ok(Language::Fr),
            "ar" | "ar-ma" | "arabic" | "العربية" => Ok(Language::Ar),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

pub(crate) fn pick<'a>(lang: Language, en: &'a str, fr: &'a str, ar: &'a str) -> &'a str {
    match lang {
        Language::En => en,
        Language::Fr => fr,
        Language::Ar => ar,
    }
}

/// Greeting appended when a language is picked
pub fn welcome(lang: Language) -> &'static str {
    pick(
        lang,
        "Marhaba! I'm your AFCON 2025 assistant. Please choose a topic below.",
        "Marhaba ! Je suis votre assistante pour la CAN 2025. Choisissez une question ci-dessous.",
        "مرحباً! أنا مساعدتك في كأس الأمم الأفريقية 2025. اختر سؤالاً أدناه.",
    )
}

/// Shown in place of an answer when the model call fails
pub fn apology(lang: Language) -> &'static str {
    pick(
        lang,
        "Sorry, I can't answer right now. Please try again.",
        "Désolé, je ne peux pas répondre pour le moment. Veuillez réessayer.",
        "عذراً، لا أستطيع الإجابة حالياً. يرجى المحاولة مرة أخرى.",
    )
}

/// Shown when the model answers with no text at all
pub fn empty_completion(lang: Language) -> &'static str {
    pick(
        lang,
        "I'm having trouble connecting to the stadium network. Please try again.",
        "J'ai du mal à me connecter au réseau du stade. Veuillez réessayer.",
        "أواجه صعوبة في الاتصال بشبكة الملعب. يرجى المحاولة مرة أخرى.",
    )
}

/// Labels the UI needs around the preset menu and the free-text box
#[derive(Debug, Clone, Serialize)]
pub struct UiStrings {
    pub language_name: &'static str,
    pub rtl: bool,
    pub choose_question: &'static str,
    pub change_language: &'static str,
    pub ask_custom: &'static str,
    pub assistant_label: &'static str,
    pub back_to_menu: &'static str,
    pub input_placeholder: &'static str,
    pub arrow: &'static str,
}

impl UiStrings {
    pub fn for_language(lang: Language) -> Self {
        Self {
            language_name: lang.native_name(),
            rtl: lang.is_rtl(),
            choose_question: pick(
                lang,
                "Choose a question",
                "Choisissez une question",
                "اختر سؤالاً",
            ),
            change_language: pick(lang, "Change Language", "Changer la langue", "تغيير اللغة"),
            ask_custom: pick(
                lang,
                "Ask Custom (AI)",
                "Autre question (IA)",
                "سؤال آخر (ذكاء اصطناعي)",
            ),
            assistant_label: pick(lang, "AI Assistant", "Assistant IA", "الذكاء الاصطناعي"),
            back_to_menu: pick(lang, "Back to menu", "Retour", "عودة للقائمة"),
            input_placeholder: pick(
                lang,
                "Type your question here...",
                "Posez votre question...",
                "أكتب سؤالك هنا...",
            ),
            arrow: if lang.is_rtl() { "←" } else { "→" },
        }
    }
}
