//! Error types for the Extractor

use schemee_domain::StructuralError;
use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractorError {
    /// The document does not have the blueprint's structure
    #[error(transparent)]
    Structural(#[from] StructuralError),

    /// Document exceeds maximum length
    #[error("Document too long: {0} bytes (max: {1})")]
    DocumentTooLong(usize, usize),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
