//! Integration tests for alias resolution over parsed token files.

use serde_json::json;

use tether_tokens::{parse_token_json, resolve_aliases, TokenPath};

/// Primitive ramp plus a two-level semantic layer on top.
fn layered_tree() -> serde_json::Value {
    json!({
        "color": {
            "$type": "color",
            "blue": {
                "500": { "$value": "#3B82F6" }
            },
            "primary": { "$value": "{color.blue.500}" }
        },
        "button": {
            "$type": "color",
            "background": { "$value": "{color.primary}" }
        }
    })
}

#[test]
fn semantic_layers_resolve_to_primitives() {
    let mut result = parse_token_json(&layered_tree()).unwrap();
    let report = resolve_aliases(&mut result.set);

    assert_eq!(report.resolved, 2);
    assert!(report.is_clean());

    for path in ["color.primary", "button.background"] {
        let token = result.set.get(&TokenPath::new(path)).unwrap();
        assert_eq!(token.value.as_str(), Some("#3B82F6"), "path {path}");
    }
}

#[test]
fn unresolved_and_cycles_are_reported_not_fatal() {
    let tree = json!({
        "a": { "value": "{b}", "type": "color" },
        "b": { "value": "{a}", "type": "color" },
        "dangling": { "value": "{nowhere.to.be.found}", "type": "color" },
        "solid": { "value": "#ffffff", "type": "color" }
    });
    let mut result = parse_token_json(&tree).unwrap();
    let report = resolve_aliases(&mut result.set);

    assert_eq!(report.resolved, 0);
    assert_eq!(report.cycles.len(), 1);
    assert_eq!(report.unresolved.len(), 1);
    assert_eq!(report.unresolved[0].0.as_str(), "dangling");

    // Every token still present with a value.
    assert_eq!(result.set.len(), 4);
    let dangling = result.set.get(&TokenPath::new("dangling")).unwrap();
    assert_eq!(dangling.value.as_str(), Some("{nowhere.to.be.found}"));
}

#[test]
fn report_display_summarizes_counts() {
    let mut result = parse_token_json(&layered_tree()).unwrap();
    let report = resolve_aliases(&mut result.set);
    let rendered = report.to_string();
    assert!(rendered.contains("resolved 2 aliases"));
}
