//! Turning flat per-component detail lists into a presentable result:
//! confidence rollup, threshold filter, nested dedup, sort, grouping.

mod dedup;
mod grouping;
mod types;

pub use types::{ComponentMatch, MatchGroup, MatchSummary, MatchingResult, VariantGroup};

use std::cmp::Ordering;

use tracing::debug;

use tether_core::config::MatchingConfig;
use tether_tokens::model::ParsedToken;

use crate::component::ComponentProperties;
use crate::matcher::MatchDetail;

/// Aggregate one token's raw matcher output. `candidates` pairs each
/// detail list with the index of its component in `components`.
pub fn aggregate(
    token: &ParsedToken,
    candidates: Vec<(usize, Vec<MatchDetail>)>,
    components: &[ComponentProperties],
    config: &MatchingConfig,
) -> MatchingResult {
    let min_confidence = config.effective_min_confidence();
    let candidate_count = candidates.len();

    let mut below_threshold = 0usize;
    let mut kept: Vec<ComponentMatch> = Vec::with_capacity(candidate_count);
    for (index, details) in candidates {
        let Some(component) = components.get(index) else {
            continue;
        };
        let entry = ComponentMatch::from_details(component, details);
        if entry.confidence.meets(min_confidence) {
            kept.push(entry);
        } else {
            below_threshold += 1;
        }
    }

    let (mut kept, deduplicated) = dedup::dedup_nested(kept);

    // Stable: ties keep encounter order.
    kept.sort_by(|a, b| {
        b.confidence
            .value()
            .partial_cmp(&a.confidence.value())
            .unwrap_or(Ordering::Equal)
    });

    let groups = grouping::group_matches(&kept);
    let summary = MatchSummary {
        components_scanned: components.len(),
        candidates: candidate_count,
        accepted: kept.len(),
        below_threshold,
        deduplicated,
    };

    debug!(
        token = %token.path,
        accepted = summary.accepted,
        below_threshold = summary.below_threshold,
        deduplicated = summary.deduplicated,
        "aggregated matches"
    );

    MatchingResult {
        token_path: token.path.clone(),
        token_type: token.token_type,
        matches: kept,
        groups,
        summary,
    }
}
