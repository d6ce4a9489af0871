//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the blueprint logic and the
//! collaborators it relies on. Implementations live in other crates.

use crate::{Address, Blueprint, MarkerId};
use std::sync::Arc;

/// A parsed document tree
///
/// Bundles the document parser, the unique selector service, the structural
/// query and the next-sibling query behind one seam.
///
/// Implemented by the infrastructure layer (schemee-html)
pub trait DocumentTree: Sized {
    /// Handle to a node of the tree
    type Node: Clone;

    /// Parse raw text into a tree
    fn parse(text: &str) -> Self;

    /// The document's top element, the anchor of every root-level address
    fn root_element(&self) -> Option<Self::Node>;

    /// Find the marker element tagged with `marker`
    fn find_marker(&self, marker: MarkerId) -> Option<Self::Node>;

    /// First child element of `node`, looking through marker elements
    fn first_child_element(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Nearest ancestor element of `node` that is not a marker
    fn parent_element(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Address of `node` starting from the top element
    ///
    /// Must be deterministic for a given tree shape and must not count
    /// marker elements.
    fn selector_for(&self, node: &Self::Node) -> Address;

    /// Apply `address` starting at `anchor`
    fn resolve(&self, anchor: &Self::Node, address: &Address) -> Option<Self::Node>;

    /// Next sibling element of `node`, skipping text
    fn next_element_sibling(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Tag name of an element node
    fn tag_name(&self, node: &Self::Node) -> Option<String>;

    /// Concatenation of the direct text children of `node`
    fn text_content(&self, node: &Self::Node) -> String;
}

/// Trait for storing and retrieving blueprints
///
/// Implemented by the infrastructure layer (schemee-store)
pub trait BlueprintStore {
    /// Error type for store operations
    type Error;

    /// Register a blueprint, replacing any previous one with the same name
    fn put(&mut self, blueprint: Blueprint) -> Result<(), Self::Error>;

    /// Get a blueprint by name
    fn get(&self, name: &str) -> Result<Option<Arc<Blueprint>>, Self::Error>;

    /// Remove a blueprint, returning whether it existed
    fn remove(&mut self, name: &str) -> Result<bool, Self::Error>;

    /// Names of all registered blueprints, sorted
    fn names(&self) -> Result<Vec<String>, Self::Error>;
}
