//! Token-to-component analysis.
//!
//! Matches parsed design tokens against scanned component trees using a
//! strict strategy ladder (recorded reference, alias chain, partial
//! path, raw value), aggregates the per-component details into
//! deduplicated, confidence-sorted results, and classifies every token
//! in a set by usage.

pub mod aggregate;
pub mod component;
pub mod engine;
pub mod matcher;
pub mod usage;

pub use aggregate::{ComponentMatch, MatchGroup, MatchSummary, MatchingResult, VariantGroup};
pub use component::{
    ColorProperty, ComponentKind, ComponentProperties, EffectProperty, SpacingProperty,
    TypographyProperty,
};
pub use engine::MatchingEngine;
pub use matcher::{match_token_against_component, MatchDetail, MatchStrategy, PropertyType};
pub use usage::{TokenUsage, UsageClass, UsageReport, UsageSummary};
