//! Aggregated result shapes handed to the presentation layer.

use std::fmt;

use serde::{Deserialize, Serialize};

use tether_core::types::Confidence;
use tether_tokens::model::{TokenPath, TokenType};

use crate::component::{ComponentKind, ComponentProperties};
use crate::matcher::MatchDetail;

/// One component that matched a token, with its detail list and the
/// rolled-up confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMatch {
    pub component_id: String,
    pub component_name: String,
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_component_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_name: Option<String>,
    pub matches: Vec<MatchDetail>,
    pub confidence: Confidence,
}

impl ComponentMatch {
    /// Build from a component header and its detail list; confidence is
    /// the mean of the detail confidences.
    pub fn from_details(component: &ComponentProperties, matches: Vec<MatchDetail>) -> Self {
        let confidences: Vec<Confidence> = matches.iter().map(|d| d.confidence).collect();
        Self {
            component_id: component.id.clone(),
            component_name: component.name.clone(),
            kind: component.kind,
            main_component_id: component.main_component_id.clone(),
            variant_name: component.variant_name.clone(),
            matches,
            confidence: Confidence::mean_of(&confidences),
        }
    }

    /// Grouping and dedup key: the main component id, or the component's
    /// own id for loose components.
    pub fn identity(&self) -> &str {
        self.main_component_id
            .as_deref()
            .unwrap_or(&self.component_id)
    }

    /// Whether at least one detail was found on the component itself
    /// rather than inherited from a descendant.
    pub fn has_direct(&self) -> bool {
        self.matches.iter().any(MatchDetail::is_direct)
    }
}

/// Matches for one main component, split per variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchGroup {
    /// Main component id, or the loose component's own id.
    pub key: String,
    pub name: String,
    pub variants: Vec<VariantGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_name: Option<String>,
    /// Ids of the [`ComponentMatch`] entries belonging to this variant.
    pub component_ids: Vec<String>,
}

/// Counters describing one matching pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub components_scanned: usize,
    /// Components with at least one raw detail, before filtering.
    pub candidates: usize,
    pub accepted: usize,
    pub below_threshold: usize,
    pub deduplicated: usize,
}

impl fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} components matched ({} below threshold, {} deduplicated)",
            self.accepted, self.components_scanned, self.below_threshold, self.deduplicated
        )
    }
}

/// Everything known about one token after a full matching pass:
/// accepted matches sorted by confidence, display groups, and counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingResult {
    pub token_path: TokenPath,
    pub token_type: TokenType,
    pub matches: Vec<ComponentMatch>,
    pub groups: Vec<MatchGroup>,
    pub summary: MatchSummary,
}

impl MatchingResult {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Number of accepted components carrying at least one direct
    /// detail. Feeds the usage analyzer.
    pub fn direct_component_usage(&self) -> usize {
        self.matches.iter().filter(|m| m.has_direct()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::{MatchStrategy, PropertyType};

    fn detail(strategy: MatchStrategy, nested: Option<&str>) -> MatchDetail {
        MatchDetail {
            property: "fill color".to_string(),
            property_type: PropertyType::Color,
            matched_value: "#3b82f6".to_string(),
            token_value: "color.primary.500".to_string(),
            confidence: strategy.confidence(),
            strategy,
            nested_main_component_id: nested.map(str::to_string),
        }
    }

    fn component(id: &str, main: Option<&str>) -> ComponentProperties {
        ComponentProperties {
            id: id.to_string(),
            name: "Button".to_string(),
            kind: ComponentKind::Component,
            main_component_id: main.map(str::to_string),
            variant_name: None,
            colors: vec![],
            typography: vec![],
            spacing: vec![],
            effects: vec![],
            children: vec![],
        }
    }

    #[test]
    fn rollup_is_the_mean_of_detail_confidences() {
        let m = ComponentMatch::from_details(
            &component("1:1", None),
            vec![
                detail(MatchStrategy::Reference, None),
                detail(MatchStrategy::Semantic, None),
                detail(MatchStrategy::Reference, None),
            ],
        );
        assert!((m.confidence.value() - 0.9833).abs() < 0.001);
    }

    #[test]
    fn identity_prefers_main_component_id() {
        let with_main = ComponentMatch::from_details(&component("2:1", Some("2:0")), vec![]);
        assert_eq!(with_main.identity(), "2:0");
        let loose = ComponentMatch::from_details(&component("2:1", None), vec![]);
        assert_eq!(loose.identity(), "2:1");
    }

    #[test]
    fn direct_flag_ignores_nested_details() {
        let nested_only = ComponentMatch::from_details(
            &component("1:1", None),
            vec![detail(MatchStrategy::Reference, Some("9:9"))],
        );
        assert!(!nested_only.has_direct());

        let mixed = ComponentMatch::from_details(
            &component("1:1", None),
            vec![
                detail(MatchStrategy::Reference, Some("9:9")),
                detail(MatchStrategy::Value, None),
            ],
        );
        assert!(mixed.has_direct());
    }
}
