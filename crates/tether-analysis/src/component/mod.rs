//! Scanned component representation.
//!
//! A [`ComponentProperties`] tree is a read-only snapshot of one scanned
//! node and its visual subtree, handed over fully materialized by the
//! host-side scanner. Each leaf property may carry a `tokenReference`
//! string recorded by the design tool.

pub mod types;

pub use types::{
    ColorProperty, ComponentKind, ComponentProperties, EffectProperty, SpacingProperty,
    TypographyProperty,
};
