//! Error types for the Compiler

use schemee_domain::{StructuralError, SyntaxError};
use thiserror::Error;

/// Errors that can occur while compiling a blueprint
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// Annotation scanning failed
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// Annotations do not line up with the sample's structure
    #[error(transparent)]
    Structural(#[from] StructuralError),
}
