//! Schemee Rust SDK
//!
//! Library facade over the blueprint compiler, the extractor and a blueprint
//! registry.
//!
//! # Example
//!
//! ```
//! use schemee_sdk::Schemee;
//! use serde_json::json;
//!
//! let mut schemee = Schemee::new();
//! schemee
//!     .compile_blueprint("headline", "<h1>{$title}Sample headline</h1>")
//!     .unwrap();
//!
//! let value = schemee.extract("headline", "<h1>Breaking news</h1>").unwrap();
//! assert_eq!(value, json!({ "title": "Breaking news" }));
//! ```

#![warn(missing_docs)]

mod client;
mod error;

pub use client::Schemee;
pub use error::{ErrorKind, SchemeeError};

pub use schemee_extractor::{ExtractorConfig, MissingFieldPolicy};
pub use schemee_store::{FileStore, MemoryStore};
pub use schemee_compiler::strip_annotations;
