//! Unused-token analysis: classify every token in a set by how it
//! reaches (or fails to reach) scanned components.

mod classify;
mod graph;
mod types;

pub use graph::TokenGraph;
pub use types::{TokenUsage, UsageClass, UsageReport, UsageSummary};

use tether_core::types::collections::FxHashMap;
use tether_tokens::model::TokenPath;
use tether_tokens::set::TokenSet;

use tracing::debug;

/// Classify every token in the set. `direct_usage` maps a token path to
/// its count of direct component matches from a prior matching pass;
/// tokens absent from the map count as zero.
pub fn analyze(set: &TokenSet, direct_usage: &FxHashMap<TokenPath, usize>) -> UsageReport {
    let graph = TokenGraph::build(set);
    let report = classify::classify(set, &graph, direct_usage);
    debug!(
        tokens = set.len(),
        edges = graph.edge_count(),
        active = report.active.len(),
        orphaned = report.orphaned.len(),
        "usage analysis complete"
    );
    report
}
