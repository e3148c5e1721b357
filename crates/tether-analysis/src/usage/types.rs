//! Usage classification result shapes.

use std::fmt;

use serde::{Deserialize, Serialize};

use tether_tokens::model::TokenPath;

/// How a token earns its keep, evaluated in declaration order with the
/// first matching class winning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UsageClass {
    /// Matched directly on at least one component.
    Active,
    /// Consumed by other tokens, consumes none itself, and its
    /// consumers reach components.
    Primitive,
    /// A middle layer: both consumed and consuming, reaching components
    /// only through its consumers.
    SemanticOnly,
    /// No direct usage and no path to any component usage.
    Orphaned,
}

impl UsageClass {
    pub fn name(self) -> &'static str {
        match self {
            UsageClass::Active => "active",
            UsageClass::Primitive => "primitive",
            UsageClass::SemanticOnly => "semantic-only",
            UsageClass::Orphaned => "orphaned",
        }
    }
}

impl fmt::Display for UsageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Per-token usage record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenUsage {
    pub path: TokenPath,
    pub direct_component_usage: usize,
    pub transitive_usage: usize,
    pub consumes_tokens: Vec<TokenPath>,
    pub consumed_by_tokens: Vec<TokenPath>,
    pub class: UsageClass,
}

/// Usage records bucketed by class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageReport {
    pub active: Vec<TokenUsage>,
    pub primitives: Vec<TokenUsage>,
    pub semantic_only: Vec<TokenUsage>,
    pub orphaned: Vec<TokenUsage>,
}

impl UsageReport {
    pub fn total(&self) -> usize {
        self.active.len() + self.primitives.len() + self.semantic_only.len() + self.orphaned.len()
    }

    pub fn summary(&self) -> UsageSummary {
        UsageSummary {
            active: self.active.len(),
            primitives: self.primitives.len(),
            semantic_only: self.semantic_only.len(),
            orphaned: self.orphaned.len(),
        }
    }
}

/// Summary counts per class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageSummary {
    pub active: usize,
    pub primitives: usize,
    pub semantic_only: usize,
    pub orphaned: usize,
}

impl fmt::Display for UsageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} active, {} primitives, {} semantic-only, {} orphaned",
            self.active, self.primitives, self.semantic_only, self.orphaned
        )
    }
}
