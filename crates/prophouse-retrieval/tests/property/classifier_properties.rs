//! Property tests: classification totality, determinism, case-insensitivity,
//! and the normalized-blend contract.

use proptest::prelude::*;

use prophouse_core::intent::{Intent, SearchWeights, SubspaceScores};
use prophouse_retrieval::classify;

proptest! {
    #[test]
    fn classify_is_total(query in ".*") {
        // Every input maps to one of the four variants; no panic, no error.
        let intent = classify(&query);
        prop_assert!(Intent::ALL.contains(&intent));
    }

    #[test]
    fn classify_is_deterministic(query in ".*") {
        prop_assert_eq!(classify(&query), classify(&query));
    }

    #[test]
    fn classify_ignores_case(query in "[a-zA-Z0-9ąćęłńóśźżĄĆĘŁŃÓŚŹŻ ]{0,40}") {
        // Polish letters map 1:1 between cases.
        prop_assert_eq!(classify(&query.to_uppercase()), classify(&query.to_lowercase()));
    }

    #[test]
    fn appending_a_physical_keyword_forces_physical(query in "[a-ząćęłńóśźż ]{0,30}") {
        let with_keyword = format!("{query} ostre");
        prop_assert_eq!(classify(&with_keyword), Intent::Physical);
    }

    #[test]
    fn blend_of_unit_scores_stays_in_unit_interval(
        identity in 0.0f64..=1.0,
        physical in 0.0f64..=1.0,
        context in 0.0f64..=1.0,
    ) {
        let scores = SubspaceScores { identity, physical, context };
        for intent in Intent::ALL {
            let blended = SearchWeights::for_intent(intent).blend(&scores);
            prop_assert!((0.0..=1.0).contains(&blended), "{intent}: {blended}");
        }
    }

    #[test]
    fn blend_is_monotone_in_each_subspace(
        base in 0.0f64..=0.5,
        bump in 0.1f64..=0.5,
    ) {
        // Raising any single subspace score never lowers the blended score.
        let low = SubspaceScores { identity: base, physical: base, context: base };
        for intent in Intent::ALL {
            let w = SearchWeights::for_intent(intent);
            let raised = SubspaceScores { physical: base + bump, ..low };
            prop_assert!(w.blend(&raised) >= w.blend(&low));
        }
    }
}

#[test]
fn uppercase_lowercase_agree_on_fixtures() {
    for query in ["OSTRE", "Na Weselu", "KRZESŁO", "Stary Drewniany Fotel Z Biblioteki"] {
        assert_eq!(classify(query), classify(&query.to_lowercase()));
    }
}
