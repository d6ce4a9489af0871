//! Token module - nodes of a blueprint's token tree

use crate::{Address, MarkerId};
use serde::{Deserialize, Serialize};

/// Kind of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Synthetic root of every blueprint
    Root,
    /// `{:name}` - opens an object
    ObjectStart,
    /// `{:}` - closes an object
    ObjectEnd,
    /// `{::name}` - opens a list
    ListStart,
    /// `{::}` - closes a list
    ListEnd,
    /// `{$name}` - a leaf value
    Value,
}

impl TokenKind {
    /// True for `ObjectEnd` and `ListEnd`
    pub fn is_closing(&self) -> bool {
        matches!(self, TokenKind::ObjectEnd | TokenKind::ListEnd)
    }

    /// True for kinds that hold children (`Root`, `ObjectStart`, `ListStart`)
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            TokenKind::Root | TokenKind::ObjectStart | TokenKind::ListStart
        )
    }

    /// True when a token of this kind closes a container of kind `open`
    pub fn closes(&self, open: TokenKind) -> bool {
        matches!(
            (self, open),
            (TokenKind::ObjectEnd, TokenKind::ObjectStart) | (TokenKind::ListEnd, TokenKind::ListStart)
        )
    }

    /// Tag name of the marker element rendered for this kind
    ///
    /// Closing kinds share the tag of the container they close.
    pub fn marker_tag(&self) -> Option<&'static str> {
        match self {
            TokenKind::Root => None,
            TokenKind::ObjectStart | TokenKind::ObjectEnd => Some("object-start"),
            TokenKind::ListStart | TokenKind::ListEnd => Some("list-start"),
            TokenKind::Value => Some("value"),
        }
    }

    /// Get kind as string
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Root => "root",
            TokenKind::ObjectStart => "object",
            TokenKind::ObjectEnd => "object-end",
            TokenKind::ListStart => "list",
            TokenKind::ListEnd => "list-end",
            TokenKind::Value => "value",
        }
    }
}

/// Byte range of an annotation in the sample text, braces included
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceSpan {
    /// Offset of the opening brace
    pub start: usize,
    /// Offset one past the closing brace
    pub end: usize,
}

impl SourceSpan {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True for zero-length spans
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A node of the token tree
///
/// The tokenizer produces a flat sequence of tokens with empty `children`;
/// learning nests them and fills in `relative_address`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Token kind
    pub kind: TokenKind,

    /// Field name; absent on closing tokens and on the root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Annotation location in the sample; absent on the root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<SourceSpan>,

    /// Marker identifier; absent on closing tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker_id: Option<MarkerId>,

    /// Directly nested tokens in declared order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Token>,

    /// Path from the parent's matched node to this token's node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_address: Option<Address>,
}

impl Token {
    /// Create the synthetic root token
    pub fn root() -> Self {
        Self {
            kind: TokenKind::Root,
            name: None,
            span: None,
            marker_id: Some(MarkerId::new()),
            children: Vec::new(),
            relative_address: None,
        }
    }

    /// Create a token for an annotation, assigning a fresh marker id unless it is a closing token
    pub fn new(kind: TokenKind, name: Option<String>, span: SourceSpan) -> Self {
        let marker_id = if kind.is_closing() {
            None
        } else {
            Some(MarkerId::new())
        };

        Self {
            kind,
            name,
            span: Some(span),
            marker_id,
            children: Vec::new(),
            relative_address: None,
        }
    }

    /// Field name, or the empty string for unnamed tokens
    pub fn name_str(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Find a direct child by name
    ///
    /// When several children share a name the last one wins, matching how
    /// an object result is filled.
    pub fn field(&self, name: &str) -> Option<&Token> {
        self.children
            .iter()
            .rev()
            .find(|child| child.name.as_deref() == Some(name))
    }

    /// Visit this token and all descendants in pre-order
    pub fn walk<'a>(&'a self, mut visit: impl FnMut(&'a Token, usize)) {
        let mut stack = vec![(self, 0usize)];
        while let Some((token, depth)) = stack.pop() {
            visit(token, depth);
            for child in token.children.iter().rev() {
                stack.push((child, depth + 1));
            }
        }
    }

    /// Structural equality ignoring marker identifiers
    pub fn same_shape(&self, other: &Token) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.kind != b.kind
                || a.name != b.name
                || a.span != b.span
                || a.relative_address != b.relative_address
                || a.children.len() != b.children.len()
            {
                return false;
            }
            pending.extend(a.children.iter().zip(b.children.iter()));
        }
        true
    }
}
