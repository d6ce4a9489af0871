//! Structural addresses - tag/position paths through a document tree
//!
//! An [`Address`] is an ordered list of [`PathStep`]s. Each step descends one
//! level: it names the expected tag and which child (among element children)
//! to take. Addresses print as CSS child-combinator selectors and parse back
//! from that form.

use crate::error::AddressParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position of a child among its parent's element children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChildIndex {
    /// 0-based position; `At(0)` is the first child
    At(usize),
    /// The last element child
    Last,
}

/// One descent step of an address
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathStep {
    /// Expected tag name of the child (lowercase)
    pub tag: String,

    /// Which child to take; `None` takes the first child with a matching tag
    pub index: Option<ChildIndex>,
}

impl PathStep {
    /// Create a step taking the child at a 0-based position
    pub fn at(tag: impl Into<String>, index: usize) -> Self {
        Self {
            tag: tag.into(),
            index: Some(ChildIndex::At(index)),
        }
    }

    /// Create a step taking the last child
    pub fn last(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            index: Some(ChildIndex::Last),
        }
    }

    /// Create a step taking the first child with this tag
    pub fn tag(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            index: None,
        }
    }
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            None => write!(f, "{}", self.tag),
            Some(ChildIndex::At(0)) => write!(f, "{}:first-child", self.tag),
            Some(ChildIndex::At(i)) => write!(f, "{}:nth-child({})", self.tag, i + 1),
            Some(ChildIndex::Last) => write!(f, "{}:last-child", self.tag),
        }
    }
}

impl FromStr for PathStep {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (tag, pseudo) = match s.split_once(':') {
            Some((tag, pseudo)) => (tag, Some(pseudo)),
            None => (s, None),
        };

        if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            return Err(AddressParseError::InvalidTag(s.to_string()));
        }

        let index = match pseudo {
            None => None,
            Some("first-child") => Some(ChildIndex::At(0)),
            Some("last-child") => Some(ChildIndex::Last),
            Some(other) => {
                let n = other
                    .strip_prefix("nth-child(")
                    .and_then(|rest| rest.strip_suffix(')'))
                    .and_then(|n| n.trim().parse::<usize>().ok())
                    .ok_or_else(|| AddressParseError::InvalidPseudo(other.to_string()))?;
                if n == 0 {
                    // nth-child is 1-based
                    return Err(AddressParseError::InvalidPseudo(other.to_string()));
                }
                Some(ChildIndex::At(n - 1))
            }
        };

        Ok(Self {
            tag: tag.to_ascii_lowercase(),
            index,
        })
    }
}

/// Ordered path of steps; empty means "the anchor itself"
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Address(Vec<PathStep>);

impl Address {
    /// Create an address from steps
    pub fn new(steps: Vec<PathStep>) -> Self {
        Self(steps)
    }

    /// The empty address, resolving to the anchor node itself
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Steps in descent order
    pub fn steps(&self) -> &[PathStep] {
        &self.0
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the address has no steps
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append a step
    pub fn push(&mut self, step: PathStep) {
        self.0.push(step);
    }

    /// Check whether `prefix` is a leading run of this address
    pub fn starts_with(&self, prefix: &Address) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// Make this address relative to `prefix`
    ///
    /// Returns `None` when `prefix` is not a leading run of this address.
    ///
    /// # Examples
    ///
    /// ```
    /// use schemee_domain::Address;
    ///
    /// let parent: Address = "body:nth-child(2) > ul:first-child".parse().unwrap();
    /// let field: Address = "body:nth-child(2) > ul:first-child > li:first-child".parse().unwrap();
    ///
    /// let relative = field.strip_prefix(&parent).unwrap();
    /// assert_eq!(relative.to_string(), "li:first-child");
    /// ```
    pub fn strip_prefix(&self, prefix: &Address) -> Option<Address> {
        self.0
            .strip_prefix(prefix.0.as_slice())
            .map(|rest| Address(rest.to_vec()))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" > ")?;
            }
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::empty());
        }
        s.split('>')
            .map(str::parse)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.to_string()
    }
}

impl TryFrom<String> for Address {
    type Error = AddressParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromIterator<PathStep> for Address {
    fn from_iter<T: IntoIterator<Item = PathStep>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
