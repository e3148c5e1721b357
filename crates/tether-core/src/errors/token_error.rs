//! Token-file loading errors.

/// Errors that can occur while loading and deserializing a token file.
///
/// Shape problems inside an otherwise well-formed file (unknown types,
/// malformed composites, unresolved aliases) are not errors; the parser
/// collects them as validation notes and keeps going.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Failed to read token file {path}: {message}")]
    Io { path: String, message: String },

    #[error("Token file is not valid JSON: {message}")]
    Json { message: String },

    #[error("Token file root must be a JSON object")]
    RootNotObject,
}
