//! Normalized design token representation.

use std::fmt;

use serde::{Deserialize, Serialize};
use tether_core::types::collections::{BTreeMap, SmallVec2};

use crate::reference::extract_aliases;

/// Enumerated token kind. Spellings follow the DTCG `$type` values, which
/// the legacy `type` field shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenType {
    Color,
    Dimension,
    FontFamily,
    FontWeight,
    Typography,
    Shadow,
    Border,
    BorderRadius,
    BorderWidth,
    Duration,
    Number,
    String,
    Boolean,
    Composition,
}

impl TokenType {
    /// Parse a `$type` / `type` string, case-insensitively.
    pub fn parse(raw: &str) -> Option<TokenType> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "color" => Some(TokenType::Color),
            "dimension" | "size" | "sizing" | "spacing" => Some(TokenType::Dimension),
            "fontfamily" | "fontfamilies" => Some(TokenType::FontFamily),
            "fontweight" | "fontweights" => Some(TokenType::FontWeight),
            "typography" => Some(TokenType::Typography),
            "shadow" | "boxshadow" => Some(TokenType::Shadow),
            "border" => Some(TokenType::Border),
            "borderradius" => Some(TokenType::BorderRadius),
            "borderwidth" => Some(TokenType::BorderWidth),
            "duration" | "time" => Some(TokenType::Duration),
            "number" => Some(TokenType::Number),
            "string" | "text" => Some(TokenType::String),
            "boolean" => Some(TokenType::Boolean),
            "composition" => Some(TokenType::Composition),
            _ => None,
        }
    }

    /// Whether this kind carries a structured multi-field value.
    pub fn is_composite(self) -> bool {
        matches!(
            self,
            TokenType::Typography
                | TokenType::Shadow
                | TokenType::Border
                | TokenType::Composition
        )
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            TokenType::Color => "color",
            TokenType::Dimension => "dimension",
            TokenType::FontFamily => "fontFamily",
            TokenType::FontWeight => "fontWeight",
            TokenType::Typography => "typography",
            TokenType::Shadow => "shadow",
            TokenType::Border => "border",
            TokenType::BorderRadius => "borderRadius",
            TokenType::BorderWidth => "borderWidth",
            TokenType::Duration => "duration",
            TokenType::Number => "number",
            TokenType::String => "string",
            TokenType::Boolean => "boolean",
            TokenType::Composition => "composition",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Scalar leaf of a token value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    String(String),
    Number(f64),
    Bool(bool),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::String(s) => write!(f, "{s}"),
            ScalarValue::Number(n) => write!(f, "{n}"),
            ScalarValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Token value: a scalar for simple tokens, or a named-field map for
/// composite tokens (typography, border, shadow).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Scalar(ScalarValue),
    Composite(BTreeMap<String, TokenValue>),
}

impl TokenValue {
    pub fn string(s: impl Into<String>) -> Self {
        TokenValue::Scalar(ScalarValue::String(s.into()))
    }

    pub fn number(n: f64) -> Self {
        TokenValue::Scalar(ScalarValue::Number(n))
    }

    /// The string content, if this is a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TokenValue::Scalar(ScalarValue::String(s)) => Some(s),
            _ => None,
        }
    }

    /// The numeric content, if this is a number scalar.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            TokenValue::Scalar(ScalarValue::Number(n)) => Some(*n),
            _ => None,
        }
    }

    /// The field map, if this is a composite value.
    pub fn as_composite(&self) -> Option<&BTreeMap<String, TokenValue>> {
        match self {
            TokenValue::Composite(fields) => Some(fields),
            _ => None,
        }
    }

    /// The referenced path, if this value is exactly one alias reference
    /// and nothing else (`"{color.primary.500}"` or `"$color.primary.500"`).
    pub fn reference_target(&self) -> Option<TokenPath> {
        let s = self.as_str()?;
        let trimmed = s.trim();
        let pure = (trimmed.starts_with('{')
            && trimmed.ends_with('}')
            && trimmed.len() > 2
            && !trimmed[1..trimmed.len() - 1].contains(['{', '}']))
            || (trimmed.starts_with('$')
                && trimmed.len() > 1
                && !trimmed[1..].contains(char::is_whitespace));
        if pure {
            Some(TokenPath::new(crate::reference::normalize_reference(
                trimmed,
            )))
        } else {
            None
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Scalar(s) => write!(f, "{s}"),
            TokenValue::Composite(fields) => {
                write!(f, "{{")?;
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// Dot-joined token path. The unique identity of a token within a set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenPath(String);

impl TokenPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Build a path from ordered segments.
    pub fn from_segments<S: AsRef<str>>(segments: &[S]) -> Self {
        Self(
            segments
                .iter()
                .map(|s| s.as_ref())
                .collect::<Vec<_>>()
                .join("."),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Last path segment; the token's short name.
    pub fn last_segment(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for TokenPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TokenPath {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TokenPath {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A single parsed design token.
///
/// Immutable after parse, except for the alias-resolution pass which may
/// replace `value` in place. `aliases` lists every token path referenced
/// from the raw value via `{other.path}` or `$other.path` syntax and is
/// retained after resolution so the semantic match strategy can follow
/// the chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedToken {
    pub path: TokenPath,
    pub name: String,
    #[serde(rename = "type")]
    pub token_type: TokenType,
    pub value: TokenValue,
    #[serde(default, skip_serializing_if = "SmallVec2::is_empty")]
    pub aliases: SmallVec2<TokenPath>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ParsedToken {
    /// Construct a token, deriving `name` from the last path segment and
    /// extracting aliases from string-like values.
    pub fn new(path: TokenPath, token_type: TokenType, value: TokenValue) -> Self {
        let name = path.last_segment().to_string();
        let aliases = collect_aliases(&value);
        Self {
            path,
            name,
            token_type,
            value,
            aliases,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether the raw value is exactly one alias reference and nothing
    /// else (`"{color.primary.500}"`). Only such values are substituted
    /// during resolution.
    pub fn is_pure_reference(&self) -> bool {
        self.value.reference_target().is_some()
    }
}

/// Walk a value and collect every alias reference, including references
/// inside composite sub-fields.
fn collect_aliases(value: &TokenValue) -> SmallVec2<TokenPath> {
    let mut out = SmallVec2::new();
    collect_aliases_into(value, &mut out);
    out
}

fn collect_aliases_into(value: &TokenValue, out: &mut SmallVec2<TokenPath>) {
    match value {
        TokenValue::Scalar(ScalarValue::String(s)) => {
            for alias in extract_aliases(s) {
                if !out.contains(&alias) {
                    out.push(alias);
                }
            }
        }
        TokenValue::Composite(fields) => {
            for sub in fields.values() {
                collect_aliases_into(sub, out);
            }
        }
        _ => {}
    }
}
