//! Alias resolution.
//!
//! Replaces pure-reference token values (`"{color.primary.500}"`) with
//! the referent's concrete value, following chains of any length. Mixed
//! strings ("1px solid {color.border}") are left untouched; the matcher
//! works with them through the `aliases` list instead. Resolution never
//! fails: unresolved targets and cycles are reported and the affected
//! tokens keep their raw values.

use std::fmt;

use tracing::debug;

use tether_core::types::collections::{FxHashSet, SmallVec};

use crate::model::{TokenPath, TokenValue};
use crate::set::TokenSet;

/// Outcome of one resolution pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolutionReport {
    /// Number of tokens whose value was substituted.
    pub resolved: usize,
    /// (token, missing target) pairs for references to absent paths.
    pub unresolved: Vec<(TokenPath, TokenPath)>,
    /// Each detected reference cycle, as the path trail that closed it.
    pub cycles: Vec<Vec<TokenPath>>,
}

impl ResolutionReport {
    pub fn is_clean(&self) -> bool {
        self.unresolved.is_empty() && self.cycles.is_empty()
    }
}

impl fmt::Display for ResolutionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "resolved {} aliases, {} unresolved, {} cycles",
            self.resolved,
            self.unresolved.len(),
            self.cycles.len()
        )
    }
}

/// Resolve pure alias references in place.
pub fn resolve_aliases(set: &mut TokenSet) -> ResolutionReport {
    let mut report = ResolutionReport::default();
    let mut replacements: Vec<(TokenPath, TokenValue)> = Vec::new();
    // Paths already reported as part of some cycle, to avoid reporting
    // the same loop once per member.
    let mut in_reported_cycle: FxHashSet<TokenPath> = FxHashSet::default();

    for token in set.iter() {
        if !token.is_pure_reference() {
            continue;
        }
        let Some(first_target) = token.aliases.first().cloned() else {
            continue;
        };

        let mut visited: FxHashSet<TokenPath> = FxHashSet::default();
        visited.insert(token.path.clone());
        let mut trail: Vec<TokenPath> = vec![token.path.clone()];
        let mut current = first_target;

        loop {
            if visited.contains(&current) {
                // Chain closed on itself.
                if !in_reported_cycle.contains(&current) {
                    let start = trail.iter().position(|p| *p == current).unwrap_or(0);
                    let mut cycle: Vec<TokenPath> = trail[start..].to_vec();
                    cycle.push(current.clone());
                    for member in &cycle {
                        in_reported_cycle.insert(member.clone());
                    }
                    report.cycles.push(cycle);
                }
                break;
            }
            match set.get(&current) {
                None => {
                    report.unresolved.push((token.path.clone(), current));
                    break;
                }
                Some(next) => {
                    visited.insert(next.path.clone());
                    trail.push(next.path.clone());
                    if next.is_pure_reference() {
                        match next.aliases.first().cloned() {
                            Some(target) => current = target,
                            None => break,
                        }
                    } else {
                        replacements.push((token.path.clone(), next.value.clone()));
                        break;
                    }
                }
            }
        }
    }

    for (path, value) in replacements {
        if let Some(token) = set.get_mut(&path) {
            token.value = value;
            report.resolved += 1;
        }
    }

    debug!(
        resolved = report.resolved,
        unresolved = report.unresolved.len(),
        cycles = report.cycles.len(),
        "alias resolution pass complete"
    );
    report
}

/// Follow a token's alias chain to its terminal concrete path, if any.
/// Used by the semantic match strategy; read-only companion to
/// [`resolve_aliases`].
pub fn chain_targets(set: &TokenSet, start: &TokenPath) -> SmallVec<[TokenPath; 4]> {
    let mut out = SmallVec::new();
    let mut visited: FxHashSet<TokenPath> = FxHashSet::default();
    visited.insert(start.clone());

    let mut current = match set.get(start) {
        Some(token) => token.aliases.first().cloned(),
        None => None,
    };
    while let Some(target) = current {
        if visited.contains(&target) {
            break;
        }
        visited.insert(target.clone());
        out.push(target.clone());
        current = set
            .get(&target)
            .and_then(|token| token.aliases.first().cloned());
    }
    out
}
