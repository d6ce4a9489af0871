//! Schemee Compiler
//!
//! Turns an annotated sample document into a [`Blueprint`].
//!
//! # Overview
//!
//! A sample is an ordinary document with annotations embedded where the
//! interesting data sits:
//!
//! | Annotation | Meaning |
//! |------------|---------|
//! | `{$name}`  | leaf value; its text follows the annotation |
//! | `{:name}` ... `{:}` | object grouping the fields in between |
//! | `{::name}` ... `{::}` | list; the enclosed fields describe one repetition |
//!
//! # Architecture
//!
//! ```text
//! sample → tokenize → inject_markers → parse (DocumentTree) → learn → Blueprint
//! ```
//!
//! # Example Usage
//!
//! ```
//! use schemee_compiler::compile;
//! use schemee_html::HtmlDocument;
//!
//! let sample = "<h1>{$title}Hello</h1><ul>{::items}<li>{$label}one</li>{::}</ul>";
//! let blueprint = compile::<HtmlDocument>("page", sample).unwrap();
//!
//! assert_eq!(blueprint.field_count(), 3);
//! ```

#![warn(missing_docs)]

mod error;
mod injector;
mod learner;
mod tokenizer;


pub use error::CompileError;
pub use injector::{inject_markers, render_marker};
pub use learner::learn;
pub use tokenizer::{strip_annotations, tokenize};

use schemee_domain::traits::DocumentTree;
use schemee_domain::Blueprint;
use tracing::info;

/// Compile an annotated sample into a blueprint named `name`
///
/// Runs the tokenizer, the marker injector and the learner in sequence.
pub fn compile<D: DocumentTree>(name: &str, sample: &str) -> Result<Blueprint, CompileError> {
    let tokens = tokenize(sample)?;
    let annotation_count = tokens.len() - 1;
    let marked = inject_markers(sample, &tokens);
    let blueprint = learn::<D>(name, tokens, &marked)?;

    info!(
        "Compiled blueprint '{}': {} annotations, {} fields",
        name,
        annotation_count,
        blueprint.field_count()
    );

    Ok(blueprint)
}
