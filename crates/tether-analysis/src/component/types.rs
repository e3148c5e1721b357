//! Component property records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Scanned node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentKind {
    Component,
    ComponentSet,
    Instance,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComponentKind::Component => "COMPONENT",
            ComponentKind::ComponentSet => "COMPONENT_SET",
            ComponentKind::Instance => "INSTANCE",
        };
        write!(f, "{name}")
    }
}

/// A color paint observed on a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorProperty {
    /// Human label, e.g. "fill color" or "stroke color".
    pub label: String,
    /// Hex spelling as extracted, any case, with or without alpha.
    pub hex: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_reference: Option<String>,
}

/// A text style observed on a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyProperty {
    pub label: String,
    pub font_family: String,
    /// Font size in pixels.
    pub font_size: f64,
    pub font_weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_reference: Option<String>,
}

/// A spacing-like numeric observed on a node: padding, gap, corner
/// radius, stroke weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingProperty {
    pub label: String,
    /// Value in pixels.
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_reference: Option<String>,
}

/// A drop/inner shadow observed on a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectProperty {
    pub label: String,
    pub color_hex: String,
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
    pub spread: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_reference: Option<String>,
}

/// One scanned component and, through `children`, its visual subtree.
///
/// `main_component_id`, when present, is shared by every variant of the
/// same component set; it is the deduplication and grouping key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentProperties {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_component_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_name: Option<String>,
    #[serde(default)]
    pub colors: Vec<ColorProperty>,
    #[serde(default)]
    pub typography: Vec<TypographyProperty>,
    #[serde(default)]
    pub spacing: Vec<SpacingProperty>,
    #[serde(default)]
    pub effects: Vec<EffectProperty>,
    #[serde(default)]
    pub children: Vec<ComponentProperties>,
}

impl ComponentProperties {
    /// The identity used for deduplication and grouping: the main
    /// component when known, otherwise the node's own id.
    pub fn identity(&self) -> &str {
        self.main_component_id.as_deref().unwrap_or(&self.id)
    }

    /// Total number of leaf properties on this node alone.
    pub fn property_count(&self) -> usize {
        self.colors.len() + self.typography.len() + self.spacing.len() + self.effects.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_prefers_main_component() {
        let mut node = ComponentProperties {
            id: "1:23".to_string(),
            name: "Button".to_string(),
            kind: ComponentKind::Component,
            main_component_id: Some("1:10".to_string()),
            variant_name: None,
            colors: vec![],
            typography: vec![],
            spacing: vec![],
            effects: vec![],
            children: vec![],
        };
        assert_eq!(node.identity(), "1:10");
        node.main_component_id = None;
        assert_eq!(node.identity(), "1:23");
    }

    #[test]
    fn deserializes_scanner_json() {
        let raw = r##"{
            "id": "1:23",
            "name": "Button",
            "type": "COMPONENT",
            "mainComponentId": "1:10",
            "variantName": "State=Default",
            "colors": [
                { "label": "fill color", "hex": "#3B82F6", "tokenReference": "color.primary.500" }
            ],
            "spacing": [
                { "label": "padding", "value": 16.0 }
            ]
        }"##;
        let node: ComponentProperties = serde_json::from_str(raw).unwrap();
        assert_eq!(node.kind, ComponentKind::Component);
        assert_eq!(node.colors.len(), 1);
        assert_eq!(
            node.colors[0].token_reference.as_deref(),
            Some("color.primary.500")
        );
        assert!(node.children.is_empty());
        assert_eq!(node.property_count(), 2);
    }
}
