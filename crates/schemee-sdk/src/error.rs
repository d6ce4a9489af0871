//! Error types for the Schemee SDK.

use schemee_compiler::CompileError;
use schemee_domain::LookupError;
use schemee_extractor::ExtractorError;
use thiserror::Error;

/// SDK operation errors
#[derive(Debug, Error)]
pub enum SchemeeError {
    /// The sample could not be compiled into a blueprint
    #[error(transparent)]
    Compile(#[from] CompileError),

    /// The document could not be extracted
    #[error(transparent)]
    Extract(#[from] ExtractorError),

    /// No blueprint registered under the requested name
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// The blueprint store failed
    #[error("Store error: {0}")]
    Store(String),
}

/// Coarse classification of a [`SchemeeError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed annotation
    Syntax,
    /// Annotations or document do not line up with the expected structure
    Structural,
    /// Unknown blueprint name
    Lookup,
    /// Storage failure
    Store,
    /// Document exceeds a configured limit
    Limit,
    /// Invalid configuration
    Config,
}

impl SchemeeError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SchemeeError::Compile(CompileError::Syntax(_)) => ErrorKind::Syntax,
            SchemeeError::Compile(CompileError::Structural(_)) => ErrorKind::Structural,
            SchemeeError::Extract(ExtractorError::Structural(_)) => ErrorKind::Structural,
            SchemeeError::Extract(ExtractorError::DocumentTooLong(..)) => ErrorKind::Limit,
            SchemeeError::Extract(ExtractorError::Config(_)) => ErrorKind::Config,
            SchemeeError::Lookup(_) => ErrorKind::Lookup,
            SchemeeError::Store(_) => ErrorKind::Store,
        }
    }
}
