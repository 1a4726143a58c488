//! Property-based tests for request parsing.
//!
//! # Invariants tested
//!
//! - **Similarity bounds:** scores lie in `[0, 1]`, are symmetric, and are
//!   1.0 only for identical strings.
//! - **Evening starts:** any text yields a start between noon and midnight.
//! - **Group range:** any text yields a group size in `1..=20`.
//! - **Known venues:** extracted venues are always catalog names, never
//!   repeated.

use std::collections::HashSet;

use barhop_core::{StaticCatalog, VenueCatalog};
use barhop_nlu::{extract_group_size, extract_start_hour, parse_request, similarity};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: similarity is a symmetric score in `[0, 1]`.
    #[test]
    fn similarity_is_bounded_and_symmetric(left in "\\PC{0,12}", right in "\\PC{0,12}") {
        let forward = similarity(&left, &right);
        prop_assert!((0.0..=1.0).contains(&forward));
        prop_assert!(forward.total_cmp(&similarity(&right, &left)).is_eq());
        prop_assert_eq!(forward.total_cmp(&1.0).is_eq(), left == right);
    }

    /// Property: extracted starts always fall in the afternoon or evening.
    #[test]
    fn starts_fall_between_noon_and_midnight(text in "[a-z0-9:@ ]{0,40}") {
        let start = extract_start_hour(&text);
        prop_assert!((12.0..24.0).contains(&start), "{text:?} gave {start}");
    }

    /// Property: group sizes stay within the supported range.
    #[test]
    fn group_sizes_are_clamped(text in "(me and |party of |group of )?[0-9]{1,6}( people| friends| of us)?") {
        let size = extract_group_size(&text);
        prop_assert!((1..=20).contains(&size));
    }

    /// Property: parsing only reports roster venues, each once.
    #[test]
    fn venues_are_known_and_unique(text in "\\PC{0,60}") {
        let parsed = parse_request(&text);
        let catalog = StaticCatalog::builtin();
        let mut seen = HashSet::new();
        for venue in &parsed.venues {
            prop_assert!(catalog.contains(venue));
            prop_assert!(seen.insert(venue.clone()));
        }
    }
}
