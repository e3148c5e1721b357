//! Integration tests for token-file parsing.

use serde_json::json;

use tether_tokens::{parse_token_file, parse_token_json, NoteKind, TokenPath, TokenType};

/// A realistic mixed-dialect token file: DTCG color ramp, legacy spacing
/// scale, composite typography and shadow, and a semantic alias layer.
fn sample_tree() -> serde_json::Value {
    json!({
        "$schema": "https://design-tokens.org",
        "color": {
            "$type": "color",
            "primary": {
                "500": { "$value": "#3B82F6" },
                "600": { "$value": "#2563EB" }
            },
            "action": { "$value": "{color.primary.500}" }
        },
        "spacing": {
            "sm": { "value": "8px", "type": "spacing" },
            "md": { "value": "16px", "type": "spacing" },
            "lg": { "value": "24px", "type": "spacing" }
        },
        "typography": {
            "heading": {
                "$type": "typography",
                "$value": {
                    "fontFamily": "Inter",
                    "fontSize": "24px",
                    "fontWeight": 700
                }
            }
        },
        "shadow": {
            "card": {
                "$type": "shadow",
                "$value": {
                    "color": "#00000040",
                    "offsetX": "0px",
                    "offsetY": "2px",
                    "blur": "8px",
                    "spread": "0px"
                }
            }
        }
    })
}

#[test]
fn parses_mixed_dialect_tree() {
    let result = parse_token_json(&sample_tree()).unwrap();

    assert_eq!(result.set.len(), 8);
    assert!(result.notes.is_empty());

    let ramp = result.set.get(&TokenPath::new("color.primary.500")).unwrap();
    assert_eq!(ramp.token_type, TokenType::Color);
    assert_eq!(ramp.value.as_str(), Some("#3B82F6"));

    let spacing = result.set.get(&TokenPath::new("spacing.md")).unwrap();
    assert_eq!(spacing.token_type, TokenType::Dimension);

    let heading = result.set.get(&TokenPath::new("typography.heading")).unwrap();
    assert_eq!(heading.token_type, TokenType::Typography);
    let fields = heading.value.as_composite().unwrap();
    assert_eq!(fields.get("fontFamily").and_then(|v| v.as_str()), Some("Inter"));
    assert_eq!(fields.get("fontWeight").and_then(|v| v.as_number()), Some(700.0));

    let action = result.set.get(&TokenPath::new("color.action")).unwrap();
    assert_eq!(action.aliases.len(), 1);
    assert_eq!(action.aliases[0].as_str(), "color.primary.500");
}

#[test]
fn root_metadata_keys_are_skipped() {
    let result = parse_token_json(&sample_tree()).unwrap();
    assert!(!result.set.iter().any(|t| t.path.as_str().starts_with('$')));
}

#[test]
fn reads_token_file_from_disk() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("tokens.json");
    std::fs::write(&path, sample_tree().to_string()).unwrap();

    let result = parse_token_file(&path).unwrap();
    assert_eq!(result.set.len(), 8);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = parse_token_file(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, tether_core::errors::TokenError::Io { .. }));
}

#[test]
fn invalid_json_is_a_json_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = parse_token_file(&path).unwrap_err();
    assert!(matches!(err, tether_core::errors::TokenError::Json { .. }));
}

#[test]
fn malformed_entries_do_not_abort_the_parse() {
    let tree = json!({
        "good": { "a": { "value": "#112233" } },
        "bad": { "b": { "value": null } },
        "also_good": { "c": { "value": "4px" } }
    });
    let result = parse_token_json(&tree).unwrap();

    assert_eq!(result.set.len(), 2);
    assert_eq!(result.notes.len(), 1);
    assert_eq!(result.notes[0].kind, NoteKind::MalformedValue);
    assert_eq!(result.notes[0].path.as_str(), "bad.b");
}
