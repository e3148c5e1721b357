//! Matching engine.
//!
//! One invocation matches one token against a full component set. The
//! per-component pass is pure and components are independent, so it
//! runs in parallel; aggregation needs the global view of all
//! per-component results and stays single-threaded.

use rayon::prelude::*;
use tracing::debug;

use tether_core::config::MatchingConfig;
use tether_core::types::collections::FxHashMap;
use tether_tokens::model::{ParsedToken, TokenPath};
use tether_tokens::set::TokenSet;

use crate::aggregate::{self, MatchingResult};
use crate::component::ComponentProperties;
use crate::matcher::{match_token_against_component, MatchDetail};
use crate::usage::{self, UsageReport};

#[derive(Debug, Clone, Default)]
pub struct MatchingEngine {
    config: MatchingConfig,
}

impl MatchingEngine {
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Match one token against every component and aggregate.
    pub fn match_token(
        &self,
        token: &ParsedToken,
        components: &[ComponentProperties],
        set: &TokenSet,
    ) -> MatchingResult {
        let candidates: Vec<(usize, Vec<MatchDetail>)> = components
            .par_iter()
            .enumerate()
            .filter_map(|(index, component)| {
                let details = match_token_against_component(token, component, set, &self.config);
                (!details.is_empty()).then_some((index, details))
            })
            .collect();

        debug!(
            token = %token.path,
            components = components.len(),
            candidates = candidates.len(),
            "matched token against component set"
        );
        aggregate::aggregate(token, candidates, components, &self.config)
    }

    /// Match every token in the set, one result per token.
    pub fn match_all(
        &self,
        set: &TokenSet,
        components: &[ComponentProperties],
    ) -> Vec<MatchingResult> {
        set.iter()
            .map(|token| self.match_token(token, components, set))
            .collect()
    }

    /// Classify token usage from a completed matching pass.
    pub fn analyze_usage(&self, set: &TokenSet, results: &[MatchingResult]) -> UsageReport {
        let direct_usage: FxHashMap<TokenPath, usize> = results
            .iter()
            .map(|result| (result.token_path.clone(), result.direct_component_usage()))
            .collect();
        usage::analyze(set, &direct_usage)
    }
}
