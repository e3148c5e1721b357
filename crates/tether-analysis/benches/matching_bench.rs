//! Matching benchmarks.
//!
//! Benchmarks: one token against component sets of growing size, and a
//! full token-set pass with usage analysis.
//! Run with: cargo bench -p tether-analysis --bench matching_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use tether_analysis::{ColorProperty, ComponentKind, ComponentProperties, MatchingEngine, SpacingProperty};
use tether_tokens::{ParsedToken, TokenPath, TokenSet, TokenType, TokenValue};

/// A Card-like component with a referenced fill, some spacing, and two
/// instance children.
fn sample_component(idx: usize) -> ComponentProperties {
    let child = |suffix: &str, reference: Option<&str>| ComponentProperties {
        id: format!("{idx}:{suffix}"),
        name: format!("Part {suffix}"),
        kind: ComponentKind::Instance,
        main_component_id: Some(format!("main:{suffix}")),
        variant_name: None,
        colors: vec![ColorProperty {
            label: "fill color".to_string(),
            hex: "#3b82f6".to_string(),
            token_reference: reference.map(str::to_string),
        }],
        typography: vec![],
        spacing: vec![],
        effects: vec![],
        children: vec![],
    };

    ComponentProperties {
        id: format!("{idx}:0"),
        name: format!("Card {idx}"),
        kind: ComponentKind::Component,
        main_component_id: Some(format!("set:{}", idx % 10)),
        variant_name: Some(format!("variant={}", idx % 4)),
        colors: vec![ColorProperty {
            label: "background".to_string(),
            hex: "#ffffff".to_string(),
            token_reference: (idx % 3 == 0).then(|| "color.primary.500".to_string()),
        }],
        typography: vec![],
        spacing: vec![SpacingProperty {
            label: "padding".to_string(),
            value: 16.0,
            token_reference: None,
        }],
        effects: vec![],
        children: vec![
            child("icon", Some("color.primary.500")),
            child("label", None),
        ],
    }
}

fn sample_token_set(size: usize) -> TokenSet {
    let mut tokens = Vec::with_capacity(size + 2);
    tokens.push(ParsedToken::new(
        TokenPath::new("color.primary.500"),
        TokenType::Color,
        TokenValue::string("#3b82f6"),
    ));
    tokens.push(ParsedToken::new(
        TokenPath::new("color.action"),
        TokenType::Color,
        TokenValue::string("{color.primary.500}"),
    ));
    for i in 0..size {
        tokens.push(ParsedToken::new(
            TokenPath::new(format!("color.ramp.{i}")),
            TokenType::Color,
            TokenValue::string(format!("#1188{i:02x}")),
        ));
    }
    TokenSet::from_tokens(tokens)
}

fn match_one_token(c: &mut Criterion) {
    let set = sample_token_set(50);
    let token = ParsedToken::new(
        TokenPath::new("color.primary.500"),
        TokenType::Color,
        TokenValue::string("#3b82f6"),
    );
    let engine = MatchingEngine::default();

    let mut group = c.benchmark_group("match_one_token");
    group.sample_size(20);
    for size in [10usize, 100, 500] {
        let components: Vec<ComponentProperties> = (0..size).map(sample_component).collect();
        group.bench_with_input(
            BenchmarkId::new("components", size),
            &components,
            |b, components| {
                b.iter(|| engine.match_token(&token, components, &set));
            },
        );
    }
    group.finish();
}

fn full_pass_with_usage(c: &mut Criterion) {
    let set = sample_token_set(50);
    let components: Vec<ComponentProperties> = (0..100).map(sample_component).collect();
    let engine = MatchingEngine::default();

    let mut group = c.benchmark_group("full_pass");
    group.sample_size(20);
    group.bench_function("match_all_and_usage", |b| {
        b.iter(|| {
            let results = engine.match_all(&set, &components);
            engine.analyze_usage(&set, &results)
        });
    });
    group.finish();
}

criterion_group!(benches, match_one_token, full_pass_with_usage);
criterion_main!(benches);
