//! Schemee Domain Layer
//!
//! This crate contains the data model shared by every other Schemee crate:
//! tokens, addresses, blueprints, the error taxonomy, and the trait interfaces
//! for document trees and blueprint registries.
//!
//! ## Key Concepts
//!
//! - **Annotation**: a bracketed marker such as `{$title}` in a sample document
//! - **Token**: one node of a blueprint's token tree (object, list or value)
//! - **Address**: tag/position steps locating a field from its parent's node
//! - **Blueprint**: the named token tree learned from a sample
//!
//! ## Architecture
//!
//! - No document parsing here; trees come in through [`traits::DocumentTree`]
//! - No storage here; registries come in through [`traits::BlueprintStore`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod address;
pub mod annotation;
pub mod blueprint;
pub mod error;
pub mod marker;
pub mod token;
pub mod traits;

// Re-exports for convenience
pub use address::{Address, ChildIndex, PathStep};
pub use annotation::remove_annotations;
pub use blueprint::Blueprint;
pub use error::{AddressParseError, LookupError, StructuralError, SyntaxError};
pub use marker::{MarkerId, MARKER_ATTRIBUTE};
pub use token::{SourceSpan, Token, TokenKind};
