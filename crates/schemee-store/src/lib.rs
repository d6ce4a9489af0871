//! Schemee Blueprint Registry
//!
//! Implements the BlueprintStore trait in memory and on disk.
//!
//! # Architecture
//!
//! - [`MemoryStore`] keeps blueprints in a map for the lifetime of a library instance
//! - [`FileStore`] writes one JSON file per blueprint so that separate
//!   processes can compile and extract
//!
//! Both stores hand out blueprints behind an `Arc`, so an extraction keeps
//! working on the blueprint it started with even if the name is replaced.
//!
//! # Examples
//!
//! ```
//! use schemee_domain::traits::BlueprintStore;
//! use schemee_domain::{Blueprint, Token};
//! use schemee_store::MemoryStore;
//!
//! let mut store = MemoryStore::new();
//! store.put(Blueprint::new("empty", Token::root())).unwrap();
//! assert_eq!(store.names().unwrap(), vec!["empty".to_string()]);
//! ```

#![warn(missing_docs)]

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Blueprint file could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Name cannot be used as a file name
    #[error("Invalid blueprint name: '{0}'")]
    InvalidName(String),
}

/// Check that `name` only uses `[A-Za-z0-9._-]` and is not a path component
pub fn validate_name(name: &str) -> Result<(), StoreError> {
    let allowed = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));

    if name.is_empty() || !allowed || name == "." || name == ".." {
        return Err(StoreError::InvalidName(name.to_string()));
    }
    Ok(())
}
