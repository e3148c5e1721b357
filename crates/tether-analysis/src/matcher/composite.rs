//! Composite token matching.
//!
//! Typography and border tokens carry structured values assembled from
//! named sub-fields. The token as a whole still participates in the
//! reference rungs like any family; when no recorded reference matches,
//! the composite counts only if every declared sub-field matches its
//! counterpart on the same property record, and the assembled match is
//! scored with the composite confidence.

use tether_core::types::collections::BTreeMap;
use tether_tokens::model::TokenValue;
use tether_tokens::reference::{normalize_reference, references_match, shared_suffix_len};
use tether_tokens::resolver::chain_targets;
use tether_tokens::set::TokenSet;

use crate::component::{ColorProperty, ComponentProperties, SpacingProperty, TypographyProperty};
use crate::matcher::node::{annotate, detail, reference_rung, render_typography, MatchContext};
use crate::matcher::types::{MatchDetail, MatchStrategy, PropertyType};
use crate::matcher::values;

/// Run rungs 1 to 3 for one sub-field against the reference recorded on
/// its candidate property, then fall back to comparing the concrete
/// value behind the sub-field.
fn sub_field_matches(
    ctx: &MatchContext<'_>,
    sub: &TokenValue,
    prop_reference: Option<&str>,
    value_check: impl Fn(&TokenValue) -> bool,
) -> bool {
    if let (Some(target), Some(raw)) = (sub.reference_target(), prop_reference) {
        let reference = normalize_reference(raw);
        if !reference.is_empty() {
            if references_match(target.as_str(), &reference)
                || chain_targets(ctx.set, &target)
                    .iter()
                    .any(|next| references_match(next.as_str(), &reference))
                || shared_suffix_len(target.as_str(), &reference) >= 1
            {
                return true;
            }
        }
    }
    match concrete_sub_value(ctx.set, sub) {
        Some(value) => value_check(value),
        None => false,
    }
}

/// The concrete value behind a sub-field, following alias hops through
/// the set when the sub-field is itself a reference.
fn concrete_sub_value<'s>(set: &'s TokenSet, sub: &'s TokenValue) -> Option<&'s TokenValue> {
    let Some(target) = sub.reference_target() else {
        return Some(sub);
    };
    let mut token = set.get(&target)?;
    for next in chain_targets(set, &target) {
        match set.get(&next) {
            Some(t) => token = t,
            None => break,
        }
    }
    if token.is_pure_reference() {
        None
    } else {
        Some(&token.value)
    }
}

pub(crate) fn typography_composite(
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

    let Some(fields) = ctx.token.value.as_composite() else {
        return;
    };
    if fields.is_empty() {
        return;
    }
    for prop in &node.typography {
        if typography_fields_match(ctx, fields, prop) {
            out.push(detail(
                ctx,
                prefix,
                &prop.label,
                PropertyType::Typography,
                render_typography(prop),
                MatchStrategy::Composite,
                nested_id,
            ));
        }
    }
}

/// Every declared sub-field of a typography token must match the same
/// text property. A declared sub-field whose counterpart is absent on
/// the property fails the composite.
fn typography_fields_match(
    ctx: &MatchContext<'_>,
    fields: &BTreeMap<String, TokenValue>,
    prop: &TypographyProperty,
) -> bool {
    let tolerance = ctx.config.effective_value_tolerance();
    let rem_base = ctx.config.effective_rem_base_px();
    let reference = prop.token_reference.as_deref();

    for (key, sub) in fields {
        let ok = match key.as_str() {
            "fontFamily" => sub_field_matches(ctx, sub, reference, |v| {
                v.as_str()
                    .map(|family| values::font_families_equal(family, &prop.font_family))
                    .unwrap_or(false)
            }),
            "fontSize" => sub_field_matches(ctx, sub, reference, |v| {
                values::token_px(v, rem_base)
                    .map(|px| values::within_tolerance(px, prop.font_size, tolerance))
                    .unwrap_or(false)
            }),
            "fontWeight" => sub_field_matches(ctx, sub, reference, |v| {
                values::font_weight_value(v)
                    .map(|weight| values::within_tolerance(weight, prop.font_weight, tolerance))
                    .unwrap_or(false)
            }),
            "lineHeight" => match prop.line_height {
                Some(line_height) => sub_field_matches(ctx, sub, reference, |v| {
                    values::token_px(v, rem_base)
                        .map(|px| values::within_tolerance(px, line_height, tolerance))
                        .unwrap_or(false)
                }),
                None => false,
            },
            "letterSpacing" => match prop.letter_spacing {
                Some(letter_spacing) => sub_field_matches(ctx, sub, reference, |v| {
                    values::token_px(v, rem_base)
                        .map(|px| values::within_tolerance(px, letter_spacing, tolerance))
                        .unwrap_or(false)
                }),
                None => false,
            },
            _ => false,
        };
        if !ok {
            return false;
        }
    }
    true
}

pub(crate) fn border_composite(
    ctx: &MatchContext<'_>,
    node: &ComponentProperties,
    prefix: &str,
    nested_id: Option<&str>,
    out: &mut Vec<MatchDetail>,
) {
    // References recorded anywhere on the node's colors or spacing are
    // authoritative regardless of label.
    let views = border_ref_views(node);
    let hits = reference_rung(ctx, &views, |v| v.reference);
    if !hits.is_empty() {
        for (view, strategy, reference) in hits {
            out.push(detail(
                ctx,
                prefix,
                view.label,
                view.property_type,
                annotate(&view.rendered, reference),
                strategy,
                nested_id,
            ));
        }
        return;
    }

    let Some(fields) = ctx.token.value.as_composite() else {
        return;
    };
    // Value assembly only makes sense against stroke-shaped slots.
    let stroke_colors: Vec<&ColorProperty> = node
        .colors
        .iter()
        .filter(|p| stroke_label(&p.label))
        .collect();
    let stroke_widths: Vec<&SpacingProperty> = node
        .spacing
        .iter()
        .filter(|p| stroke_label(&p.label))
        .collect();

    if let Some(assembly) = assemble_border(ctx, fields, &stroke_colors, &stroke_widths) {
        out.push(detail(
            ctx,
            prefix,
            assembly.label,
            assembly.property_type,
            assembly.rendered,
            MatchStrategy::Composite,
            nested_id,
        ));
    }
}

struct RefView<'p> {
    label: &'p str,
    rendered: String,
    reference: Option<&'p str>,
    property_type: PropertyType,
}

fn border_ref_views(node: &ComponentProperties) -> Vec<RefView<'_>> {
    let mut views = Vec::with_capacity(node.colors.len() + node.spacing.len());
    for prop in &node.colors {
        views.push(RefView {
            label: &prop.label,
            rendered: prop.hex.clone(),
            reference: prop.token_reference.as_deref(),
            property_type: PropertyType::Color,
        });
    }
    for prop in &node.spacing {
        views.push(RefView {
            label: &prop.label,
            rendered: format!("{}px", prop.value),
            reference: prop.token_reference.as_deref(),
            property_type: PropertyType::Spacing,
        });
    }
    views
}

fn stroke_label(label: &str) -> bool {
    let lower = label.to_ascii_lowercase();
    lower.contains("stroke") || lower.contains("border") || lower.contains("outline")
}

struct BorderAssembly<'p> {
    label: &'p str,
    rendered: String,
    property_type: PropertyType,
}

/// All declared sub-fields of a border token must match. `color` and
/// `width` bind to stroke-labeled color and spacing slots; `style`
/// matches only the implicit solid stroke. Any other declared sub-field
/// fails the composite.
fn assemble_border<'p>(
    ctx: &MatchContext<'_>,
    fields: &BTreeMap<String, TokenValue>,
    stroke_colors: &[&'p ColorProperty],
    stroke_widths: &[&'p SpacingProperty],
) -> Option<BorderAssembly<'p>> {
    if !fields.contains_key("color") && !fields.contains_key("width") {
        return None;
    }
    let tolerance = ctx.config.effective_value_tolerance();
    let rem_base = ctx.config.effective_rem_base_px();

    let mut color_hit: Option<&ColorProperty> = None;
    let mut width_hit: Option<&SpacingProperty> = None;

    for (key, sub) in fields {
        match key.as_str() {
            "color" => {
                color_hit = stroke_colors.iter().copied().find(|prop| {
                    sub_field_matches(ctx, sub, prop.token_reference.as_deref(), |v| {
                        v.as_str()
                            .map(|color| values::colors_equal(color, &prop.hex))
                            .unwrap_or(false)
                    })
                });
                color_hit?;
            }
            "width" => {
                width_hit = stroke_widths.iter().copied().find(|prop| {
                    sub_field_matches(ctx, sub, prop.token_reference.as_deref(), |v| {
                        values::token_px(v, rem_base)
                            .map(|px| values::within_tolerance(px, prop.value, tolerance))
                            .unwrap_or(false)
                    })
                });
                width_hit?;
            }
            "style" => {
                let solid = concrete_sub_value(ctx.set, sub)
                    .and_then(TokenValue::as_str)
                    .map(|style| style.trim().eq_ignore_ascii_case("solid"))
                    .unwrap_or(false);
                if !solid {
                    return None;
                }
            }
            _ => return None,
        }
    }

    match (color_hit, width_hit) {
        (Some(color), Some(width)) => Some(BorderAssembly {
            label: &color.label,
            rendered: format!("{} / {}px", color.hex, width.value),
            property_type: PropertyType::Color,
        }),
        (Some(color), None) => Some(BorderAssembly {
            label: &color.label,
            rendered: color.hex.clone(),
            property_type: PropertyType::Color,
        }),
        (None, Some(width)) => Some(BorderAssembly {
            label: &width.label,
            rendered: format!("{}px", width.value),
            property_type: PropertyType::Spacing,
        }),
        (None, None) => None,
    }
}
