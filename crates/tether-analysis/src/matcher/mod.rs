//! Token-to-component matching.

mod composite;
mod node;
mod types;
mod values;

pub use node::match_token_against_component;
pub use types::{MatchDetail, MatchStrategy, PropertyType};
pub use values::{canonical_px, colors_equal, normalize_hex};
