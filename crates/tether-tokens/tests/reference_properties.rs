//! Property tests for reference normalization.

use proptest::prelude::*;

use tether_tokens::{normalize_reference, references_match, shared_suffix_len};

proptest! {
    #[test]
    fn normalize_is_idempotent(s in ".{0,80}") {
        let once = normalize_reference(&s);
        let twice = normalize_reference(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalize_strips_wrappers_equivalently(path in "[a-z][a-z0-9]{0,8}(\\.[a-z0-9]{1,8}){0,4}") {
        let braced = format!("{{{path}}}");
        let quoted = format!("'{path}'");
        let dollar = format!("${path}");
        prop_assert_eq!(normalize_reference(&braced), normalize_reference(&path));
        prop_assert_eq!(normalize_reference(&quoted), normalize_reference(&path));
        prop_assert_eq!(normalize_reference(&dollar), normalize_reference(&path));
    }

    #[test]
    fn match_is_symmetric(a in "[a-z]{1,6}(\\.[a-z]{1,6}){0,3}", b in "[a-z]{1,6}(\\.[a-z]{1,6}){0,3}") {
        prop_assert_eq!(references_match(&a, &b), references_match(&b, &a));
    }

    #[test]
    fn every_path_matches_itself(a in "[a-z]{1,6}(\\.[a-z]{1,6}){0,3}") {
        prop_assert!(references_match(&a, &a));
    }

    #[test]
    fn suffix_len_is_symmetric_and_bounded(a in "[a-z]{1,6}(\\.[a-z]{1,6}){0,3}", b in "[a-z]{1,6}(\\.[a-z]{1,6}){0,3}") {
        let forward = shared_suffix_len(&a, &b);
        let backward = shared_suffix_len(&b, &a);
        prop_assert_eq!(forward, backward);
        let max_segments = a.split('.').count().min(b.split('.').count());
        prop_assert!(forward <= max_segments);
    }

    #[test]
    fn prefixed_path_still_matches(path in "[a-z]{1,6}(\\.[a-z]{1,6}){1,3}", prefix in "[a-z]{1,6}") {
        let namespaced = format!("{prefix}.{path}");
        prop_assert!(references_match(&namespaced, &path));
    }
}
