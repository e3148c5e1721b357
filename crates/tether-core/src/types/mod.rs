//! Data structures shared across the Tether crates.
//! FxHashMap/FxHashSet, SmallVec aliases, and the clamped confidence type.

pub mod collections;
pub mod confidence;

pub use collections::{FxHashMap, FxHashSet};
pub use confidence::Confidence;
