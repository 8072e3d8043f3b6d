//! Property-based tests for preset lookup

use super::matching::normalize;
use super::*;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_language() -> impl Strategy<Value = Language> {
    prop_oneof![Just(Language::En), Just(Language::Fr), Just(Language::Ar)]
}

/// A language together with the index of one of its presets
fn arb_preset() -> impl Strategy<Value = (Language, usize)> {
    arb_language().prop_flat_map(|lang| (Just(lang), 0..presets(lang).len()))
}

fn arb_padding() -> impl Strategy<Value = String> {
    "[ \t\n]{0,4}"
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_padded_question_resolves_to_its_answer(
        (lang, idx) in arb_preset(),
        before in arb_padding(),
        after in arb_padding(),
        upper in any::<bool>(),
    ) {
        let entry = presets(lang)[idx];
        let question = if upper {
            entry.question.to_uppercase()
        } else {
            entry.question.to_string()
        };
        let query = format!("{before}{question}{after}");

        let found = find_preset(&query, lang).expect("preset question must match");
        prop_assert_eq!(found.kind, MatchKind::Exact);
        prop_assert_eq!(found.entry.answer, entry.answer);
    }

    #[test]
    fn prop_lookup_is_idempotent(query in "\\PC{0,40}", lang in arb_language()) {
        let first = find_preset(&query, lang);
        let second = find_preset(&query, lang);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_match_is_justified(query in "[a-zA-Z ?']{0,30}", lang in arb_language()) {
        if let Some(found) = find_preset(&query, lang) {
            let q = normalize(&query);
            prop_assert!(!q.is_empty());
            let justified = found.entry.phrasings().any(|p| {
                let p = normalize(p);
                match found.kind {
                    MatchKind::Exact => p == q,
                    MatchKind::Contains => p.contains(&q) || q.contains(&p),
                }
            });
            prop_assert!(justified, "match for {:?} not explained by any phrasing", query);
        }
    }

    #[test]
    fn prop_first_containment_match_wins(query in "[a-z ]{1,12}", lang in arb_language()) {
        if let Some(found) = find_preset(&query, lang) {
            if found.kind == MatchKind::Contains {
                let q = normalize(&query);
                let first = presets(lang).iter().position(|e| {
                    e.phrasings().any(|p| {
                        let p = normalize(p);
                        p.contains(&q) || q.contains(&p)
                    })
                });
                prop_assert_eq!(
                    first.map(|i| presets(lang)[i].question),
                    Some(found.entry.question)
                );
            }
        }
    }
}
