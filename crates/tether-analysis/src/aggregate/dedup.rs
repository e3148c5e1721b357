//! Nested-match deduplication.
//!
//! A parent that only inherits a match from a descendant should not
//! appear alongside that descendant in the result set. The inherited
//! entry survives only when it is the sole evidence that the nested
//! component is in play.

use tether_core::types::collections::FxHashSet;

use crate::aggregate::types::ComponentMatch;

/// Drop inherited-only entries whose nested components already appear
/// directly. Returns the surviving matches and the number dropped.
pub(crate) fn dedup_nested(matches: Vec<ComponentMatch>) -> (Vec<ComponentMatch>, usize) {
    let direct_ids: FxHashSet<String> = matches
        .iter()
        .filter(|m| m.has_direct())
        .map(|m| m.identity().to_string())
        .collect();

    let before = matches.len();
    let kept: Vec<ComponentMatch> = matches
        .into_iter()
        .filter(|m| {
            if m.has_direct() {
                return true;
            }
            m.matches
                .iter()
                .filter_map(|d| d.nested_main_component_id.as_deref())
                .any(|id| !direct_ids.contains(id))
        })
        .collect();
    let dropped = before - kept.len();
    (kept, dropped)
}
