//! Match record types.

use std::fmt;

use serde::{Deserialize, Serialize};
use tether_core::types::confidence::Confidence;

/// Which strategy produced a match. Order is the strict matching
/// priority; a lower strategy never runs once a higher one has matched
/// for the same property family on the same node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchStrategy {
    /// The property's recorded token reference names this token.
    Reference,
    /// The reference names a token this token aliases (chain walk).
    Semantic,
    /// Reference and token path share a trailing segment run.
    PartialPath,
    /// Raw values are equal under normalization and tolerance.
    Value,
    /// Composite token assembled from independently matched sub-fields.
    Composite,
}

impl MatchStrategy {
    /// The confidence this strategy awards.
    pub fn confidence(self) -> Confidence {
        match self {
            MatchStrategy::Reference => Confidence::REFERENCE,
            MatchStrategy::Semantic => Confidence::SEMANTIC,
            MatchStrategy::PartialPath => Confidence::PARTIAL,
            MatchStrategy::Value => Confidence::VALUE,
            MatchStrategy::Composite => Confidence::COMPOSITE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MatchStrategy::Reference => "reference",
            MatchStrategy::Semantic => "semantic",
            MatchStrategy::PartialPath => "partial-path",
            MatchStrategy::Value => "value",
            MatchStrategy::Composite => "composite",
        }
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Property family a match was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyType {
    Color,
    Typography,
    Spacing,
    Effect,
}

impl PropertyType {
    pub fn name(self) -> &'static str {
        match self {
            PropertyType::Color => "color",
            PropertyType::Typography => "typography",
            PropertyType::Spacing => "spacing",
            PropertyType::Effect => "effect",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One observed correspondence between a token and a single property on
/// a single node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetail {
    /// Human label, prefixed with child names for nested matches
    /// ("Icon → stroke color").
    pub property: String,
    pub property_type: PropertyType,
    /// The component's raw value, annotated with the reference string
    /// when a reference strategy produced the match.
    pub matched_value: String,
    /// The token's dot path.
    pub token_value: String,
    pub confidence: Confidence,
    pub strategy: MatchStrategy,
    /// Set when the match was found on a descendant node: that node's
    /// main component id (or its own id when it has none).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nested_main_component_id: Option<String>,
}

impl MatchDetail {
    /// A match found directly on the component, not inherited from a
    /// descendant.
    pub fn is_direct(&self) -> bool {
        self.nested_main_component_id.is_none()
    }
}
