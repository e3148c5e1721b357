//! Token reference normalization and comparison.
//!
//! A token reference is a string recorded next to a component property,
//! naming which design token was applied there. References arrive in
//! several spellings (`{color.primary.500}`, `$color.primary.500`,
//! `'color.primary.500'`, bare) which all normalize to the same
//! lowercase dot-path.

use crate::model::TokenPath;

/// Normalize a reference string to a bare lowercase dot-path.
///
/// Trims whitespace, strips surrounding quotes, surrounding `{}`, and a
/// leading `$` until none remain, then lowercases. Idempotent:
/// normalizing an already-normalized string is a no-op.
pub fn normalize_reference(raw: &str) -> String {
    let mut s = raw.trim();

    loop {
        let before = s;
        if s.len() >= 2 {
            let bytes = s.as_bytes();
            let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
            if (first == b'\'' && last == b'\'') || (first == b'"' && last == b'"') {
                s = s[1..s.len() - 1].trim();
            }
        }
        if let Some(inner) = s.strip_prefix('{').and_then(|i| i.strip_suffix('}')) {
            s = inner.trim();
        }
        if let Some(rest) = s.strip_prefix('$') {
            s = rest.trim();
        }
        if s == before {
            break;
        }
    }

    s.to_lowercase()
}

/// Whether two normalized references name the same token.
///
/// True on exact equality or when one is a dot-suffix of the other
/// (`kds.color.primary.500` matches `color.primary.500`).
pub fn references_match(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a == b || a.ends_with(&format!(".{b}")) || b.ends_with(&format!(".{a}"))
}

/// Number of trailing dot-segments shared by two normalized references.
pub fn shared_suffix_len(a: &str, b: &str) -> usize {
    a.rsplit('.')
        .zip(b.rsplit('.'))
        .take_while(|(x, y)| x == y)
        .count()
}

/// Extract every token path referenced from a raw string value.
///
/// Recognizes any number of `{path}` occurrences, and the whole-string
/// `$path` form. Returned paths are normalized.
pub fn extract_aliases(raw: &str) -> Vec<TokenPath> {
    let mut out = Vec::new();

    let mut rest = raw;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let inner = &after[..close];
                if !inner.trim().is_empty() {
                    out.push(TokenPath::new(normalize_reference(inner)));
                }
                rest = &after[close + 1..];
            }
            None => break,
        }
    }

    let trimmed = raw.trim();
    if out.is_empty() && trimmed.starts_with('$') && trimmed.len() > 1 {
        out.push(TokenPath::new(normalize_reference(trimmed)));
    }

    out
}
