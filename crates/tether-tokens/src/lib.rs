//! Design token model, file parsing, reference normalization, and alias
//! resolution.
//!
//! Tokens arrive as JSON files in either the DTCG dialect (`$value` /
//! `$type`) or the legacy dialect (`value` / `type`). The parser walks the
//! file into a flat [`TokenSet`] of [`ParsedToken`]s keyed by dot-joined
//! path; the resolver then substitutes pure alias references in place,
//! reporting unresolved targets and cycles without failing.

pub mod model;
pub mod parser;
pub mod reference;
pub mod resolver;
pub mod set;

pub use model::{ParsedToken, ScalarValue, TokenPath, TokenType, TokenValue};
pub use parser::{parse_token_file, parse_token_json, NoteKind, TokenParseResult, ValidationNote};
pub use reference::{extract_aliases, normalize_reference, references_match, shared_suffix_len};
pub use resolver::{chain_targets, resolve_aliases, ResolutionReport};
pub use set::TokenSet;
