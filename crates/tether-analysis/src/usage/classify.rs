//! Usage classification over the token reference graph.

use tether_core::types::collections::{FxHashMap, FxHashSet};
use tether_tokens::model::TokenPath;
use tether_tokens::set::TokenSet;

use crate::usage::graph::TokenGraph;
use crate::usage::types::{TokenUsage, UsageClass, UsageReport};

/// Direct usage plus everything that flows in through consumers. The
/// shared visited set guards cycles and keeps diamond-shaped consumer
/// graphs from counting the same consumer twice.
fn transitive_usage(
    path: &TokenPath,
    graph: &TokenGraph,
    direct_usage: &FxHashMap<TokenPath, usize>,
    visited: &mut FxHashSet<TokenPath>,
) -> usize {
    if !visited.insert(path.clone()) {
        return 0;
    }
    let own = direct_usage.get(path).copied().unwrap_or(0);
    let consumers = graph.consumed_by(path);
    own + consumers
        .iter()
        .map(|consumer| transitive_usage(consumer, graph, direct_usage, visited))
        .sum::<usize>()
}

pub(crate) fn classify(
    set: &TokenSet,
    graph: &TokenGraph,
    direct_usage: &FxHashMap<TokenPath, usize>,
) -> UsageReport {
    let mut report = UsageReport::default();

    for token in set.iter() {
        let consumes_tokens = graph.consumes(&token.path);
        let consumed_by_tokens = graph.consumed_by(&token.path);
        let direct = direct_usage.get(&token.path).copied().unwrap_or(0);

        let mut visited = FxHashSet::default();
        let transitive = transitive_usage(&token.path, graph, direct_usage, &mut visited);

        let class = if direct > 0 {
            UsageClass::Active
        } else if !consumed_by_tokens.is_empty() && consumes_tokens.is_empty() && transitive > 0 {
            UsageClass::Primitive
        } else if !consumed_by_tokens.is_empty() && !consumes_tokens.is_empty() && transitive > 0 {
            UsageClass::SemanticOnly
        } else {
            UsageClass::Orphaned
        };

        let usage = TokenUsage {
            path: token.path.clone(),
            direct_component_usage: direct,
            transitive_usage: transitive,
            consumes_tokens,
            consumed_by_tokens,
            class,
        };
        match class {
            UsageClass::Active => report.active.push(usage),
            UsageClass::Primitive => report.primitives.push(usage),
            UsageClass::SemanticOnly => report.semantic_only.push(usage),
            UsageClass::Orphaned => report.orphaned.push(usage),
        }
    }

    report
}
