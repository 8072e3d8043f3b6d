//! Matching a loosely typed query against a preset table
//!
//! Tries, in table order:
//! 1. Exact match against any phrasing (case-insensitive, trimmed)
//! 2. Containment in either direction
//!
//! First hit wins. There is no scoring.

use super::PresetEntry;

/// How a preset was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Contains,
}

/// A successful lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetMatch {
    pub entry: &'static PresetEntry,
    pub kind: MatchKind,
}

/// Strategy for picking a preset for a query
pub trait PresetMatcher {
    fn find(&self, query: &str, table: &'static [PresetEntry]) -> Option<PresetMatch>;
}

/// Exact phrasing first, then substring containment
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainmentMatcher;

impl PresetMatcher for ContainmentMatcher {
    fn find(&self, query: &str, table: &'static [PresetEntry]) -> Option<PresetMatch> {
        let query = normalize(query);
        // An empty query is contained in every phrasing
        if query.is_empty() {
            return None;
        }

        if let Some(entry) = table
            .iter()
            .find(|entry| entry.phrasings().any(|p| normalize(p) == query))
        {
            return Some(PresetMatch {
                entry,
                kind: MatchKind::Exact,
            });
        }

        table
            .iter()
            .find(|entry| {
                entry.phrasings().any(|p| {
                    let p = normalize(p);
                    query.contains(&p) || p.contains(&query)
                })
            })
            .map(|entry| PresetMatch {
                entry,
                kind: MatchKind::Contains,
            })
    }
}

/// Lowercase and trim
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}
