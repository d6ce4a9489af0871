//! Schemee Extractor
//!
//! Walks a [`Blueprint`](schemee_domain::Blueprint) over a new document and
//! collects the values found at the learned addresses.
//!
//! # Overview
//!
//! Every field of a blueprint carries an address relative to the node its
//! container matched. The extractor keeps an explicit stack of matched
//! containers, resolves each field from the top of that stack, and splices
//! the values into a nested result:
//!
//! - a value becomes a JSON string holding the node's direct text
//! - an object becomes a JSON object keyed by field name
//! - a list becomes a JSON array with one object per repetition, where
//!   repetitions are the first item and its following element siblings
//!
//! # Architecture
//!
//! ```text
//! Document → parse (DocumentTree) → traversal stack → serde_json::Value
//! ```
//!
//! # Example Usage
//!
//! ```
//! use schemee_compiler::compile;
//! use schemee_extractor::{Extractor, ExtractorConfig};
//! use schemee_html::HtmlDocument;
//! use serde_json::json;
//!
//! let blueprint = compile::<HtmlDocument>(
//!     "tags",
//!     "<ul>{::tags}<li>{$tag}one</li>{::}</ul>",
//! ).unwrap();
//!
//! let extractor = Extractor::<HtmlDocument>::new(ExtractorConfig::default()).unwrap();
//! let value = extractor
//!     .extract(&blueprint, "<ul><li>red</li><li>green</li></ul>")
//!     .unwrap();
//!
//! assert_eq!(value, json!({ "tags": [{ "tag": "red" }, { "tag": "green" }] }));
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;

#[cfg(test)]
mod tests;

pub use config::{ExtractorConfig, MissingFieldPolicy};
pub use error::ExtractorError;
pub use extractor::Extractor;
