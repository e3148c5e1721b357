//! Token-file parsing.
//!
//! Accepts both the DTCG dialect (`$value` / `$type`, group-level `$type`
//! inheritance) and the legacy dialect (`value` / `type`). Shape problems
//! inside the file are collected as [`ValidationNote`]s; only I/O and
//! JSON-syntax failures are errors.

use std::fmt;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use tether_core::errors::TokenError;
use tether_core::types::collections::BTreeMap;

use crate::model::{ParsedToken, ScalarValue, TokenPath, TokenType, TokenValue};
use crate::set::TokenSet;

/// Warning-level condition recorded while parsing a token file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NoteKind {
    /// `$type` / `type` string was present but not a recognized kind.
    UnknownType,
    /// Shadow value was an array of layers; only the first layer is kept.
    MultiLayerShadow,
    /// Value shape could not be represented; the token was skipped.
    MalformedValue,
}

/// A non-fatal observation tied to one token path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationNote {
    pub path: TokenPath,
    pub kind: NoteKind,
    pub message: String,
}

impl fmt::Display for ValidationNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Output of one token-file parse.
#[derive(Debug, Clone, Default)]
pub struct TokenParseResult {
    pub set: TokenSet,
    pub notes: Vec<ValidationNote>,
}

/// Read and parse a token file from disk.
pub fn parse_token_file(path: &Path) -> Result<TokenParseResult, TokenError> {
    let content = std::fs::read_to_string(path).map_err(|e| TokenError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let root: Value = serde_json::from_str(&content).map_err(|e| TokenError::Json {
        message: e.to_string(),
    })?;
    parse_token_json(&root)
}

/// Parse an already-deserialized token tree.
pub fn parse_token_json(root: &Value) -> Result<TokenParseResult, TokenError> {
    let obj = root.as_object().ok_or(TokenError::RootNotObject)?;

    let mut result = TokenParseResult::default();
    let mut segments: Vec<String> = Vec::new();
    for (key, node) in obj {
        if key.starts_with('$') {
            continue;
        }
        walk(key, node, &mut segments, None, &mut result);
    }

    debug!(
        tokens = result.set.len(),
        notes = result.notes.len(),
        "parsed token tree"
    );
    Ok(result)
}

/// Recursive descent over one named node. `segments` accumulates the path;
/// `inherited` carries the nearest enclosing group's `$type`.
fn walk(
    key: &str,
    node: &Value,
    segments: &mut Vec<String>,
    inherited: Option<TokenType>,
    result: &mut TokenParseResult,
) {
    let Some(obj) = node.as_object() else {
        // Scalar children of a group (group-level descriptions and the
        // like) are not tokens.
        return;
    };

    segments.push(key.to_string());

    let value_field = obj.get("$value").or_else(|| obj.get("value"));
    match value_field {
        Some(raw_value) => build_token(obj, raw_value, segments, inherited, result),
        None => {
            let group_path = TokenPath::from_segments(segments);
            let group_type = declared_type(obj, &group_path, result).or(inherited);
            for (child_key, child) in obj {
                if child_key.starts_with('$') {
                    continue;
                }
                // A string-valued "type" entry was consumed as the group
                // type above, not a child.
                if child_key == "type" && child.is_string() {
                    continue;
                }
                walk(child_key, child, segments, group_type, result);
            }
        }
    }

    segments.pop();
}

/// Build a token from a node carrying a value field.
fn build_token(
    obj: &serde_json::Map<String, Value>,
    raw_value: &Value,
    segments: &[String],
    inherited: Option<TokenType>,
    result: &mut TokenParseResult,
) {
    let path = TokenPath::from_segments(segments);

    let declared = declared_type(obj, &path, result);
    let joined_lower = path.as_str().to_lowercase();

    // Multi-layer shadows keep only the first layer.
    let effective_value = if let Value::Array(layers) = raw_value {
        let is_shadowish = declared == Some(TokenType::Shadow)
            || inherited == Some(TokenType::Shadow)
            || joined_lower.contains("shadow")
            || joined_lower.contains("elevation");
        if is_shadowish && !layers.is_empty() {
            if layers.len() > 1 {
                result.notes.push(ValidationNote {
                    path: path.clone(),
                    kind: NoteKind::MultiLayerShadow,
                    message: format!(
                        "shadow has {} layers; keeping the first",
                        layers.len()
                    ),
                });
            }
            &layers[0]
        } else {
            result.notes.push(ValidationNote {
                path,
                kind: NoteKind::MalformedValue,
                message: "array value is not a supported token shape".to_string(),
            });
            return;
        }
    } else {
        raw_value
    };

    let Some(value) = json_to_token_value(effective_value) else {
        result.notes.push(ValidationNote {
            path,
            kind: NoteKind::MalformedValue,
            message: "value is null or not representable".to_string(),
        });
        return;
    };

    let token_type = declared
        .or(inherited)
        .unwrap_or_else(|| infer_type(&joined_lower, &value));

    let description = obj
        .get("$description")
        .or_else(|| obj.get("description"))
        .and_then(Value::as_str)
        .map(str::to_string);

    let mut token = ParsedToken::new(path, token_type, value);
    token.description = description;
    result.set.insert(token);
}

/// Read the node's `$type` (or legacy string `type`), noting
/// unrecognized spellings against the given path.
fn declared_type(
    obj: &serde_json::Map<String, Value>,
    path: &TokenPath,
    result: &mut TokenParseResult,
) -> Option<TokenType> {
    let raw = obj
        .get("$type")
        .and_then(Value::as_str)
        .or_else(|| obj.get("type").and_then(Value::as_str))?;
    let parsed = TokenType::parse(raw);
    if parsed.is_none() {
        result.notes.push(ValidationNote {
            path: path.clone(),
            kind: NoteKind::UnknownType,
            message: format!("unrecognized type {raw:?}"),
        });
    }
    parsed
}

/// Convert a JSON value into a token value. Arrays and nulls are handled
/// by the caller.
fn json_to_token_value(value: &Value) -> Option<TokenValue> {
    match value {
        Value::String(s) => Some(TokenValue::Scalar(ScalarValue::String(s.clone()))),
        Value::Number(n) => n.as_f64().map(|f| TokenValue::Scalar(ScalarValue::Number(f))),
        Value::Bool(b) => Some(TokenValue::Scalar(ScalarValue::Bool(*b))),
        Value::Object(fields) => {
            let mut out = BTreeMap::new();
            for (key, sub) in fields {
                out.insert(key.clone(), json_to_token_value(sub)?);
            }
            Some(TokenValue::Composite(out))
        }
        Value::Array(_) | Value::Null => None,
    }
}

/// Infer a token type when no `$type` is declared or inherited: value
/// shape first, then path keywords, then the scalar kind.
fn infer_type(path_lower: &str, value: &TokenValue) -> TokenType {
    if let Some(s) = value.as_str() {
        if looks_like_color(s) {
            return TokenType::Color;
        }
        if looks_like_dimension(s) {
            return TokenType::Dimension;
        }
    }
    if let Some(fields) = value.as_composite() {
        if fields.contains_key("fontFamily") || fields.contains_key("fontSize") {
            return TokenType::Typography;
        }
        if fields.contains_key("blur")
            || (fields.contains_key("offsetX") && fields.contains_key("offsetY"))
            || (fields.contains_key("x") && fields.contains_key("y"))
        {
            return TokenType::Shadow;
        }
        if fields.contains_key("color") && fields.contains_key("width") {
            return TokenType::Border;
        }
    }

    if path_lower.contains("color") || path_lower.contains("colour") {
        return TokenType::Color;
    }
    if path_lower.contains("radius") {
        return TokenType::BorderRadius;
    }
    if path_lower.contains("border") && path_lower.contains("width") {
        return TokenType::BorderWidth;
    }
    if ["spacing", "space", "gap", "padding", "margin", "size"]
        .iter()
        .any(|kw| path_lower.contains(kw))
    {
        return TokenType::Dimension;
    }
    if path_lower.contains("weight") {
        return TokenType::FontWeight;
    }
    if path_lower.contains("font") || path_lower.contains("family") {
        return TokenType::FontFamily;
    }
    if path_lower.contains("shadow") || path_lower.contains("elevation") {
        return TokenType::Shadow;
    }
    if path_lower.contains("duration") || path_lower.contains("transition") {
        return TokenType::Duration;
    }

    match value {
        TokenValue::Scalar(ScalarValue::Number(_)) => TokenType::Number,
        TokenValue::Scalar(ScalarValue::Bool(_)) => TokenType::Boolean,
        TokenValue::Scalar(ScalarValue::String(_)) => TokenType::String,
        TokenValue::Composite(_) => TokenType::Composition,
    }
}

/// Hex, rgb()/rgba(), or hsl()/hsla() color spellings.
fn looks_like_color(s: &str) -> bool {
    let t = s.trim();
    if let Some(hex) = t.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    let lower = t.to_ascii_lowercase();
    lower.starts_with("rgb(")
        || lower.starts_with("rgba(")
        || lower.starts_with("hsl(")
        || lower.starts_with("hsla(")
}

/// A numeric string with a px/rem/em suffix.
fn looks_like_dimension(s: &str) -> bool {
    let t = s.trim().to_ascii_lowercase();
    for suffix in ["px", "rem", "em"] {
        if let Some(num) = t.strip_suffix(suffix) {
            return num.trim().parse::<f64>().is_ok();
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> TokenParseResult {
        parse_token_json(&value).unwrap()
    }

    #[test]
    fn parses_dtcg_tokens() {
        let result = parse(json!({
            "color": {
                "primary": {
                    "500": { "$value": "#3B82F6", "$type": "color" }
                }
            }
        }));
        assert_eq!(result.set.len(), 1);
        let token = result.set.get(&TokenPath::new("color.primary.500")).unwrap();
        assert_eq!(token.token_type, TokenType::Color);
        assert_eq!(token.value.as_str(), Some("#3B82F6"));
        assert_eq!(token.name, "500");
        assert!(result.notes.is_empty());
    }

    #[test]
    fn parses_legacy_tokens() {
        let result = parse(json!({
            "spacing": {
                "md": { "value": "16px", "type": "spacing" }
            }
        }));
        let token = result.set.get(&TokenPath::new("spacing.md")).unwrap();
        assert_eq!(token.token_type, TokenType::Dimension);
    }

    #[test]
    fn group_type_is_inherited() {
        let result = parse(json!({
            "color": {
                "$type": "color",
                "brand": { "$value": "#112233" },
                "accent": { "$value": "#445566", "$type": "dimension" }
            }
        }));
        let brand = result.set.get(&TokenPath::new("color.brand")).unwrap();
        assert_eq!(brand.token_type, TokenType::Color);
        // Explicit token-level type wins over the group type.
        let accent = result.set.get(&TokenPath::new("color.accent")).unwrap();
        assert_eq!(accent.token_type, TokenType::Dimension);
    }

    #[test]
    fn infers_type_from_value_shape_and_path() {
        let result = parse(json!({
            "brand": { "main": { "value": "#ff0000" } },
            "gutter": { "value": "8px" },
            "layout": { "spacing": { "value": 12 } },
            "misc": { "flag": { "value": true } }
        }));
        assert_eq!(
            result.set.get(&TokenPath::new("brand.main")).unwrap().token_type,
            TokenType::Color
        );
        assert_eq!(
            result.set.get(&TokenPath::new("gutter")).unwrap().token_type,
            TokenType::Dimension
        );
        assert_eq!(
            result.set.get(&TokenPath::new("layout.spacing")).unwrap().token_type,
            TokenType::Dimension
        );
        assert_eq!(
            result.set.get(&TokenPath::new("misc.flag")).unwrap().token_type,
            TokenType::Boolean
        );
    }

    #[test]
    fn unknown_type_is_noted_and_inference_applies() {
        let result = parse(json!({
            "color": { "odd": { "$value": "#123456", "$type": "gradient" } }
        }));
        assert_eq!(result.notes.len(), 1);
        assert_eq!(result.notes[0].kind, NoteKind::UnknownType);
        let token = result.set.get(&TokenPath::new("color.odd")).unwrap();
        assert_eq!(token.token_type, TokenType::Color);
    }

    #[test]
    fn multi_layer_shadow_keeps_first_layer() {
        let result = parse(json!({
            "shadow": {
                "card": {
                    "$type": "shadow",
                    "$value": [
                        { "color": "#00000040", "offsetX": "0px", "offsetY": "2px", "blur": "4px", "spread": "0px" },
                        { "color": "#00000020", "offsetX": "0px", "offsetY": "8px", "blur": "16px", "spread": "0px" }
                    ]
                }
            }
        }));
        assert_eq!(result.notes.len(), 1);
        assert_eq!(result.notes[0].kind, NoteKind::MultiLayerShadow);
        let token = result.set.get(&TokenPath::new("shadow.card")).unwrap();
        let fields = token.value.as_composite().unwrap();
        assert_eq!(fields.get("blur").and_then(|v| v.as_str()), Some("4px"));
    }

    #[test]
    fn null_and_unsupported_arrays_are_skipped_with_note() {
        let result = parse(json!({
            "broken": { "a": { "value": null } },
            "list": { "b": { "value": [1, 2, 3] } }
        }));
        assert!(result.set.is_empty());
        assert_eq!(result.notes.len(), 2);
        assert!(result.notes.iter().all(|n| n.kind == NoteKind::MalformedValue));
    }

    #[test]
    fn non_object_root_is_an_error() {
        let err = parse_token_json(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, TokenError::RootNotObject));
    }

    #[test]
    fn alias_values_carry_aliases() {
        let result = parse(json!({
            "color": {
                "action": { "$value": "{color.primary.500}", "$type": "color" }
            }
        }));
        let token = result.set.get(&TokenPath::new("color.action")).unwrap();
        assert_eq!(token.aliases.len(), 1);
        assert_eq!(token.aliases[0].as_str(), "color.primary.500");
    }
}
