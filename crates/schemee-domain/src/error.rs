//! Error taxonomy shared by the compiler, the extractor and the facade

use crate::Address;
use thiserror::Error;

/// Errors raised while scanning annotations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// A `{` with no `}` after it
    #[error("Unterminated annotation starting at offset {offset}")]
    UnterminatedAnnotation {
        /// Byte offset of the opening brace
        offset: usize,
    },
}

/// Errors raised when the annotated structure does not line up with the document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    /// Container open/close annotations do not pair up
    #[error("Unbalanced container{}: {reason}", offset_suffix(.offset))]
    UnbalancedContainer {
        /// Byte offset of the offending annotation, if any
        offset: Option<usize>,
        /// What went wrong
        reason: String,
    },

    /// A marker element could not be found in the parsed sample
    #[error("Marker for field '{field}' not found in the parsed sample")]
    MarkerNotFound {
        /// Name of the field whose marker is missing
        field: String,
    },

    /// A container annotation encloses no element
    #[error("Container '{name}' does not enclose any element")]
    EmptyContainer {
        /// Name of the container
        name: String,
    },

    /// A field sits outside the element its container is anchored on
    #[error("Field '{field}' is not inside the element anchoring '{container}'")]
    DetachedField {
        /// Name of the field
        field: String,
        /// Name of the enclosing container (empty for the root)
        container: String,
    },

    /// An address resolved to no node during extraction
    #[error("No node found for field '{field}' at '{address}'")]
    NodeNotFound {
        /// Name of the field being resolved
        field: String,
        /// The relative address that failed
        address: Address,
    },
}

/// Errors raised when looking up a blueprint
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No blueprint registered under this name
    #[error("Unknown blueprint: {name}")]
    UnknownBlueprint {
        /// The requested name
        name: String,
    },
}

/// Errors raised when parsing an address from its selector form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressParseError {
    /// Step has an empty or malformed tag
    #[error("Invalid tag in selector step '{0}'")]
    InvalidTag(String),

    /// Step has an unsupported pseudo-class
    #[error("Unsupported position '{0}' (expected first-child, last-child or nth-child(n))")]
    InvalidPseudo(String),
}

fn offset_suffix(offset: &Option<usize>) -> String {
    offset.map(|o| format!(" at offset {}", o)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbalanced_message_includes_offset() {
        let err = StructuralError::UnbalancedContainer {
            offset: Some(12),
            reason: "no open container to close".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unbalanced container at offset 12: no open container to close"
        );

        let err = StructuralError::UnbalancedContainer {
            offset: None,
            reason: "'items' is never closed".to_string(),
        };
        assert_eq!(err.to_string(), "Unbalanced container: 'items' is never closed");
    }
}
