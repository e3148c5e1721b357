//! Per-node matching: the strategy ladder and subtree recursion.
//!
//! For one (token, component) pair, every property family on every node
//! of the subtree is tried against the token using the strict priority
//! order: reference, semantic, partial path, then value. The first rung
//! that yields any match for a family on a node wins; all matches from
//! that rung are recorded and lower rungs never run for that family on
//! that node.

use std::collections::VecDeque;

use tether_core::config::MatchingConfig;
use tether_core::types::collections::{FxHashSet, SmallVec4};
use tether_tokens::model::{ParsedToken, TokenType};
use tether_tokens::reference::{normalize_reference, references_match, shared_suffix_len};
use tether_tokens::set::TokenSet;

use crate::component::ComponentProperties;
use crate::matcher::composite;
use crate::matcher::types::{MatchDetail, MatchStrategy, PropertyType};
use crate::matcher::values;

/// Shared per-call state: the token's normalized path and the normalized
/// paths reachable through its alias chain, computed once per
/// (token, component) invocation.
pub(crate) struct MatchContext<'a> {
    pub token: &'a ParsedToken,
    pub set: &'a TokenSet,
    pub config: &'a MatchingConfig,
    pub token_path: String,
    pub alias_targets: SmallVec4<String>,
}

impl<'a> MatchContext<'a> {
    fn new(token: &'a ParsedToken, set: &'a TokenSet, config: &'a MatchingConfig) -> Self {
        // Sub-field references of composite values take part in composite
        // assembly, not in the node-level semantic rung.
        let alias_targets = if token.value.as_composite().is_some() {
            SmallVec4::new()
        } else {
            alias_closure(token, set)
        };
        Self {
            token,
            set,
            config,
            token_path: normalize_reference(token.path.as_str()),
            alias_targets,
        }
    }

    /// Evaluate rungs 1 to 3 against one recorded reference. Returns the
    /// best strategy that applies.
    pub(crate) fn reference_strategy(&self, reference: &str) -> Option<MatchStrategy> {
        let normalized = normalize_reference(reference);
        if normalized.is_empty() {
            return None;
        }
        if references_match(&self.token_path, &normalized) {
            return Some(MatchStrategy::Reference);
        }
        if self
            .alias_targets
            .iter()
            .any(|target| references_match(target, &normalized))
        {
            return Some(MatchStrategy::Semantic);
        }
        if shared_suffix_len(&self.token_path, &normalized) >= 1 {
            return Some(MatchStrategy::PartialPath);
        }
        None
    }
}

/// Every path reachable from the token through alias references,
/// normalized, in breadth-first order. Cycle-safe.
fn alias_closure(token: &ParsedToken, set: &TokenSet) -> SmallVec4<String> {
    let mut out = SmallVec4::new();
    let mut visited: FxHashSet<String> = FxHashSet::default();
    visited.insert(normalize_reference(token.path.as_str()));

    let mut queue: VecDeque<_> = token.aliases.iter().cloned().collect();
    while let Some(path) = queue.pop_front() {
        let normalized = normalize_reference(path.as_str());
        if !visited.insert(normalized.clone()) {
            continue;
        }
        out.push(normalized);
        if let Some(next) = set.get(&path) {
            queue.extend(next.aliases.iter().cloned());
        }
    }
    out
}

/// Match one token against one component subtree. Returns every detail
/// found anywhere under the root, child-originated details labeled with
/// the child path and carrying the child's identity.
pub fn match_token_against_component(
    token: &ParsedToken,
    component: &ComponentProperties,
    set: &TokenSet,
    config: &MatchingConfig,
) -> Vec<MatchDetail> {
    let ctx = MatchContext::new(token, set, config);
    let mut details = Vec::new();
    match_subtree(&ctx, component, "", None, 0, &mut details);
    details
}

fn match_subtree(
    ctx: &MatchContext<'_>,
    node: &ComponentProperties,
    prefix: &str,
    nested_id: Option<&str>,
    depth: usize,
    out: &mut Vec<MatchDetail>,
) {
    if depth > ctx.config.effective_max_nested_depth() {
        return;
    }

    match_single_node(ctx, node, prefix, nested_id, out);

    for child in &node.children {
        let child_prefix = if prefix.is_empty() {
            child.name.clone()
        } else {
            format!("{prefix} → {}", child.name)
        };
        match_subtree(
            ctx,
            child,
            &child_prefix,
            Some(child.identity()),
            depth + 1,
            out,
        );
    }
}

/// Route the token to its property family and run the ladder on one node.
fn match_single_node(
    ctx: &MatchContext<'_>,
    node: &ComponentProperties,
    prefix: &str,
    nested_id: Option<&str>,
    out: &mut Vec<MatchDetail>,
) {
    match ctx.token.token_type {
        TokenType::Color => color_family(ctx, node, prefix, nested_id, out),
        TokenType::Dimension
        | TokenType::BorderRadius
        | TokenType::BorderWidth
        | TokenType::Number => spacing_family(ctx, node, prefix, nested_id, out),
        TokenType::FontFamily | TokenType::FontWeight => {
            typography_scalar_family(ctx, node, prefix, nested_id, out)
        }
        TokenType::Shadow => effect_family(ctx, node, prefix, nested_id, out),
        TokenType::Typography => composite::typography_composite(ctx, node, prefix, nested_id, out),
        TokenType::Border => composite::border_composite(ctx, node, prefix, nested_id, out),
        // No component property family carries these.
        TokenType::Duration | TokenType::String | TokenType::Boolean | TokenType::Composition => {}
    }
}

/// Build one detail record.
pub(crate) fn detail(
    ctx: &MatchContext<'_>,
    prefix: &str,
    label: &str,
    property_type: PropertyType,
    matched_value: String,
    strategy: MatchStrategy,
    nested_id: Option<&str>,
) -> MatchDetail {
    let property = if prefix.is_empty() {
        label.to_string()
    } else {
        format!("{prefix} → {label}")
    };
    MatchDetail {
        property,
        property_type,
        matched_value,
        token_value: ctx.token.path.to_string(),
        confidence: strategy.confidence(),
        strategy,
        nested_main_component_id: nested_id.map(str::to_string),
    }
}

/// Annotate a raw value with the reference that produced the match.
pub(crate) fn annotate(raw: &str, reference: &str) -> String {
    format!("{raw} (ref: {reference})")
}

/// Generic rungs 1-3 pass over one family's properties. Returns all
/// matches from the single best rung that hit anything.
pub(crate) fn reference_rung<'p, P>(
    ctx: &MatchContext<'_>,
    props: &'p [P],
    get_ref: impl Fn(&P) -> Option<&str>,
) -> Vec<(&'p P, MatchStrategy, &'p str)> {
    let mut hits: Vec<(&P, MatchStrategy, &str)> = Vec::new();

    for strategy in [
        MatchStrategy::Reference,
        MatchStrategy::Semantic,
        MatchStrategy::PartialPath,
    ] {
        for prop in props {
            let Some(reference) = get_ref(prop) else {
                continue;
            };
            if ctx.reference_strategy(reference) == Some(strategy) {
                hits.push((prop, strategy, reference));
            }
        }
        if !hits.is_empty() {
            break;
        }
    }
    hits
}

fn color_family(
    ctx: &MatchContext<'_>,
    node: &ComponentProperties,
    prefix: &str,
    nested_id: Option<&str>,
    out: &mut Vec<MatchDetail>,
) {
    let hits = reference_rung(ctx, &node.colors, |p| p.token_reference.as_deref());
    if !hits.is_empty() {
        for (prop, strategy, reference) in hits {
            out.push(detail(
                ctx,
                prefix,
                &prop.label,
                PropertyType::Color,
                annotate(&prop.hex, reference),
                strategy,
                nested_id,
            ));
        }
        return;
    }

    let Some(token_color) = ctx.token.value.as_str() else {
        return;
    };
    for prop in &node.colors {
        if values::colors_equal(token_color, &prop.hex) {
            out.push(detail(
                ctx,
                prefix,
                &prop.label,
                PropertyType::Color,
                prop.hex.clone(),
                MatchStrategy::Value,
                nested_id,
            ));
        }
    }
}

fn spacing_family(
    ctx: &MatchContext<'_>,
    node: &ComponentProperties,
    prefix: &str,
    nested_id: Option<&str>,
    out: &mut Vec<MatchDetail>,
) {
    let hits = reference_rung(ctx, &node.spacing, |p| p.token_reference.as_deref());
    if !hits.is_empty() {
        for (prop, strategy, reference) in hits {
            out.push(detail(
                ctx,
                prefix,
                &prop.label,
                PropertyType::Spacing,
                annotate(&format!("{}px", prop.value), reference),
                strategy,
                nested_id,
            ));
        }
        return;
    }

    let rem_base = ctx.config.effective_rem_base_px();
    let tolerance = ctx.config.effective_value_tolerance();
    let Some(token_px) = values::token_px(&ctx.token.value, rem_base) else {
        return;
    };
    for prop in &node.spacing {
        if values::within_tolerance(token_px, prop.value, tolerance) {
            out.push(detail(
                ctx,
                prefix,
                &prop.label,
                PropertyType::Spacing,
                format!("{}px", prop.value),
                MatchStrategy::Value,
                nested_id,
            ));
        }
    }
}

fn typography_scalar_family(
    ctx: &MatchContext<'_>,
    node: &ComponentProperties,
    prefix: &str,
    nested_id: Option<&str>,
    out: &mut Vec<MatchDetail>,
) {
    let hits = reference_rung(ctx, &node.typography, |p| p.token_reference.as_deref());
    if !hits.is_empty() {
        for (prop, strategy, reference) in hits {
            out.push(detail(
                ctx,
                prefix,
                &prop.label,
                PropertyType::Typography,
                annotate(&render_typography(prop), reference),
                strategy,
                nested_id,
            ));
        }
        return;
    }

    let tolerance = ctx.config.effective_value_tolerance();
    for prop in &node.typography {
        let matched = match ctx.token.token_type {
            TokenType::FontFamily => ctx
                .token
                .value
                .as_str()
                .map(|family| values::font_families_equal(family, &prop.font_family))
                .unwrap_or(false),
            TokenType::FontWeight => values::font_weight_value(&ctx.token.value)
                .map(|weight| values::within_tolerance(weight, prop.font_weight, tolerance))
                .unwrap_or(false),
            _ => false,
        };
        if matched {
            out.push(detail(
                ctx,
                prefix,
                &prop.label,
                PropertyType::Typography,
                render_typography(prop),
                MatchStrategy::Value,
                nested_id,
            ));
        }
    }
}

fn effect_family(
    ctx: &MatchContext<'_>,
    node: &ComponentProperties,
    prefix: &str,
    nested_id: Option<&str>,
    out: &mut Vec<MatchDetail>,
) {
    let hits = reference_rung(ctx, &node.effects, |p| p.token_reference.as_deref());
    if !hits.is_empty() {
        for (prop, strategy, reference) in hits {
            out.push(detail(
                ctx,
                prefix,
                &prop.label,
                PropertyType::Effect,
                annotate(&render_effect(prop), reference),
                strategy,
                nested_id,
            ));
        }
        return;
    }

    // Malformed shadow values simply never match.
    let Some(fields) = ctx.token.value.as_composite() else {
        return;
    };
    let tolerance = ctx.config.effective_value_tolerance();
    let rem_base = ctx.config.effective_rem_base_px();
    for prop in &node.effects {
        if values::effect_value_matches(fields, prop, tolerance, rem_base) {
            out.push(detail(
                ctx,
                prefix,
                &prop.label,
                PropertyType::Effect,
                render_effect(prop),
                MatchStrategy::Value,
                nested_id,
            ));
        }
    }
}

pub(crate) fn render_typography(prop: &crate::component::TypographyProperty) -> String {
    format!(
        "{} {}px/{}",
        prop.font_family, prop.font_size, prop.font_weight
    )
}

pub(crate) fn render_effect(prop: &crate::component::EffectProperty) -> String {
    format!(
        "{}px {}px {}px {}px {}",
        prop.offset_x, prop.offset_y, prop.blur, prop.spread, prop.color_hex
    )
}
