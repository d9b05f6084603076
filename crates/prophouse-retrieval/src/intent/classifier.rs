//! Intent classification from query text: keyword substring matching with a
//! word-count fallback.
//!
//! Matching is deliberately loose: a trigger anywhere inside the lowercased
//! query counts, even in the middle of a larger word. This favors recall of
//! intent signals over precision and must not be tightened to tokenized
//! matching, which would silently change results for compound Polish words.

use prophouse_core::constants::SHORT_QUERY_MAX_WORDS;
use prophouse_core::Intent;

/// Physical-attribute triggers: materials, colors, size/weight/age adjectives.
const PHYSICAL_KEYWORDS: &[&str] = &[
    // Materials and textures
    "ostre",
    "tępe",
    "metalowe",
    "drewniane",
    "szklane",
    "plastikowe",
    "papierowe",
    // Colors
    "czerwone",
    "zielone",
    "niebieskie",
    "żółte",
    "czarne",
    "białe",
    "kolorowe",
    // Size and weight
    "duże",
    "małe",
    "wysokie",
    "niskie",
    "długie",
    "ciężkie",
    "lekkie",
    // Age and condition
    "stare",
    "nowe",
    "zardzewiałe",
    "zniszczone",
    "antyk",
];

/// Context triggers: rooms/venues, occasions, decades, eras, usage categories.
const CONTEXT_KEYWORDS: &[&str] = &[
    // Rooms and venues
    "kuchni",
    "kuchenne",
    "łazienki",
    "salon",
    "biuro",
    "szkoła",
    "klasa",
    // Occasions and holidays
    "wesele",
    "weselu",
    "ślub",
    "pogrzeb",
    "święta",
    "boże narodzenie",
    "wielkanoc",
    // Decades
    "lata 20",
    "lata 30",
    "lata 40",
    "lata 50",
    "lata 60",
    "lata 70",
    "lata 80",
    "lata 90",
    // Eras
    "wojenne",
    "średniowieczne",
    "futurystyczne",
    // Usage categories
    "jedzenie",
    "picie",
    "dekoracja",
];

/// Classify the retrieval intent behind a query.
///
/// Precedence: physical > context > specific > default. First match wins.
/// A property cue ("ostre") is the strongest signal for re-weighting away
/// from name matching, so "ostre dekoracje na wesele" resolves to
/// [`Intent::Physical`] even though it also carries a context trigger.
///
/// Total and deterministic. Every input, including the empty string and
/// non-Polish text, produces a defined intent. An empty or whitespace-only
/// query resolves to [`Intent::Specific`].
pub fn classify(query: &str) -> Intent {
    let q = query.to_lowercase();

    if PHYSICAL_KEYWORDS.iter().any(|kw| q.contains(kw)) {
        return Intent::Physical;
    }

    if CONTEXT_KEYWORDS.iter().any(|kw| q.contains(kw)) {
        return Intent::Context;
    }

    // Short queries without any trigger most likely name a concrete object
    // ("krzesło") and should favor identity similarity.
    if untrimmed_word_count(&q) <= SHORT_QUERY_MAX_WORDS {
        return Intent::Specific;
    }

    Intent::Default
}

/// Token count of the query split on whitespace runs without trimming.
///
/// Boundary whitespace contributes an empty token on each side it touches,
/// so "krzesło " counts 2 and "  krzesło  " counts 3. The empty query is a
/// single empty token. A whitespace-only query is one separator run with an
/// empty token on both sides, count 2.
fn untrimmed_word_count(q: &str) -> usize {
    if q.is_empty() {
        return 1;
    }
    q.split_whitespace().count()
        + q.starts_with(char::is_whitespace) as usize
        + q.ends_with(char::is_whitespace) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_keyword_appears_in_both_tables() {
        for kw in PHYSICAL_KEYWORDS {
            assert!(
                !CONTEXT_KEYWORDS.contains(kw),
                "'{kw}' is in both keyword tables"
            );
        }
    }

    #[test]
    fn keywords_are_lowercase() {
        for kw in PHYSICAL_KEYWORDS.iter().chain(CONTEXT_KEYWORDS) {
            assert_eq!(*kw, kw.to_lowercase(), "'{kw}' must be stored lowercase");
        }
    }

    #[test]
    fn untrimmed_word_count_keeps_boundary_tokens() {
        assert_eq!(untrimmed_word_count(""), 1);
        assert_eq!(untrimmed_word_count(" "), 2);
        assert_eq!(untrimmed_word_count("   "), 2);
        assert_eq!(untrimmed_word_count("krzesło"), 1);
        assert_eq!(untrimmed_word_count("krzesło "), 2);
        assert_eq!(untrimmed_word_count("  krzesło  "), 3);
        assert_eq!(untrimmed_word_count("brzytwa sweeneya "), 3);
    }

    #[test]
    fn negative_fixture_words_are_not_triggers() {
        // The multi-word fallback fixture relies on these staying unlisted.
        for word in ["fotel", "biblioteki", "stary", "drewniany"] {
            assert!(PHYSICAL_KEYWORDS.iter().all(|kw| !word.contains(kw)));
            assert!(CONTEXT_KEYWORDS.iter().all(|kw| !word.contains(kw)));
        }
    }
}
