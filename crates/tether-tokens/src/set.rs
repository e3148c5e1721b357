//! Insertion-ordered token collection with path lookup.

use serde::{Deserialize, Serialize};
use tether_core::types::collections::FxHashMap;

use crate::model::{ParsedToken, TokenPath};

/// A flat collection of parsed tokens, preserving file order, indexed by
/// dot-joined path. Duplicate paths resolve last-write-wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenSet {
    tokens: Vec<ParsedToken>,
    #[serde(skip)]
    index: FxHashMap<TokenPath, usize>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from parsed tokens.
    pub fn from_tokens(tokens: Vec<ParsedToken>) -> Self {
        let mut set = Self::new();
        for token in tokens {
            set.insert(token);
        }
        set
    }

    /// Insert a token. An existing token at the same path is replaced.
    pub fn insert(&mut self, token: ParsedToken) {
        match self.index.get(&token.path) {
            Some(&i) => self.tokens[i] = token,
            None => {
                self.index.insert(token.path.clone(), self.tokens.len());
                self.tokens.push(token);
            }
        }
    }

    pub fn get(&self, path: &TokenPath) -> Option<&ParsedToken> {
        self.index.get(path).map(|&i| &self.tokens[i])
    }

    pub fn get_mut(&mut self, path: &TokenPath) -> Option<&mut ParsedToken> {
        self.index.get(path).map(|&i| &mut self.tokens[i])
    }

    pub fn contains(&self, path: &TokenPath) -> bool {
        self.index.contains_key(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParsedToken> {
        self.tokens.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = &TokenPath> {
        self.tokens.iter().map(|t| &t.path)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Rebuild the path index. Needed after deserialization, which skips
    /// the index field.
    pub fn rebuild_index(&mut self) {
        self.index.clear();
        for (i, token) in self.tokens.iter().enumerate() {
            self.index.insert(token.path.clone(), i);
        }
    }
}

impl<'a> IntoIterator for &'a TokenSet {
    type Item = &'a ParsedToken;
    type IntoIter = std::slice::Iter<'a, ParsedToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl FromIterator<ParsedToken> for TokenSet {
    fn from_iter<I: IntoIterator<Item = ParsedToken>>(iter: I) -> Self {
        let mut set = Self::new();
        for token in iter {
            set.insert(token);
        }
        set
    }
}
