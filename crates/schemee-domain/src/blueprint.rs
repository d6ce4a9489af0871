//! Blueprint module - a named, learned token tree

use crate::{Token, TokenKind};
use serde::{Deserialize, Serialize};

/// A learned blueprint
///
/// Blueprints are produced by the compiler and never modified afterwards;
/// recompiling a name produces a new blueprint that replaces the old one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blueprint {
    /// Registry name
    pub name: String,

    /// Root of the token tree
    pub root: Token,
}

impl Blueprint {
    /// Create a new blueprint
    pub fn new(name: impl Into<String>, root: Token) -> Self {
        Self {
            name: name.into(),
            root,
        }
    }

    /// Number of declared fields (every token below the root)
    pub fn field_count(&self) -> usize {
        let mut count = 0;
        self.root.walk(|token, _| {
            if token.kind != TokenKind::Root {
                count += 1;
            }
        });
        count
    }

    /// Structural equality ignoring marker identifiers
    pub fn same_shape(&self, other: &Blueprint) -> bool {
        self.name == other.name && self.root.same_shape(&other.root)
    }
}
