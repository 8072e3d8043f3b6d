//! Preset questions and answers, and lookup over them
//!
//! The tables are static and never mutated. Lookup goes through a
//! [`PresetMatcher`] so the matching strategy can change without touching
//! callers.

mod data;
pub mod matching;

#[cfg(test)]
mod proptests;

pub use matching::{ContainmentMatcher, MatchKind, PresetMatch, PresetMatcher};

use crate::i18n::Language;
use serde::Serialize;

/// A canned question/answer pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PresetEntry {
    pub question: &'static str,
    pub answer: &'static str,
    /// Other phrasings that should land on this entry
    #[serde(skip)]
    pub variants: &'static [&'static str],
}

impl PresetEntry {
    /// The displayed question followed by its variants
    pub fn phrasings(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.question).chain(self.variants.iter().copied())
    }
}

/// Preset table for a language, in menu order
pub fn presets(lang: Language) -> &'static [PresetEntry] {
    match lang {
        Language::En => data::EN,
        Language::Fr => data::FR,
        Language::Ar => data::AR,
    }
}

/// Look up the preset answering `query`, using the default matcher
pub fn find_preset(query: &str, lang: Language) -> Option<PresetMatch> {
    ContainmentMatcher.find(query, presets(lang))
}

/// Answer text for `query`, or `None` when nothing matches
pub fn resolve_preset(query: &str, lang: Language) -> Option<&'static str> {
    find_preset(query, lang).map(|m| m.entry.answer)
}
