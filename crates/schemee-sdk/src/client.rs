//! Schemee facade implementation.

use crate::error::SchemeeError;
use schemee_compiler::compile;
use schemee_domain::traits::{BlueprintStore, DocumentTree};
use schemee_domain::{Blueprint, LookupError};
use schemee_extractor::{Extractor, ExtractorConfig};
use schemee_html::HtmlDocument;
use schemee_store::MemoryStore;
use serde_json::Value;
use std::fmt::Display;
use std::sync::Arc;
use tracing::debug;

/// Compiles annotated samples into blueprints and extracts documents with them
///
/// Owns its blueprint registry: blueprints compiled by one instance are only
/// visible to that instance (or to others sharing the same store directory).
pub struct Schemee<S = MemoryStore, D = HtmlDocument> {
    store: S,
    extractor: Extractor<D>,
}

impl Schemee {
    /// Create an instance with an in-memory registry and the default extraction settings
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new(),
            extractor: Extractor::default(),
        }
    }
}

impl Default for Schemee {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, D> Schemee<S, D>
where
    S: BlueprintStore,
    S::Error: Display,
    D: DocumentTree,
{
    /// Create an instance over `store` with the given extraction settings
    pub fn with_store(store: S, config: ExtractorConfig) -> Result<Self, SchemeeError> {
        Ok(Self {
            store,
            extractor: Extractor::new(config)?,
        })
    }

    /// Compile `sample` and register the result as `name`
    ///
    /// Replaces any blueprint previously registered under `name`. On error
    /// the registry is left untouched.
    pub fn compile_blueprint(&mut self, name: &str, sample: &str) -> Result<(), SchemeeError> {
        let blueprint = compile::<D>(name, sample)?;
        self.store.put(blueprint).map_err(store_error)?;
        debug!("Registered blueprint '{}'", name);
        Ok(())
    }

    /// Extract `document` with the blueprint registered as `name`
    ///
    /// Fails with [`LookupError::UnknownBlueprint`] when no such blueprint exists.
    pub fn extract(&self, name: &str, document: &str) -> Result<Value, SchemeeError> {
        let blueprint = self
            .blueprint(name)?
            .ok_or_else(|| LookupError::UnknownBlueprint {
                name: name.to_string(),
            })?;

        Ok(self.extractor.extract(&blueprint, document)?)
    }

    /// Blueprint registered as `name`, if any
    pub fn blueprint(&self, name: &str) -> Result<Option<Arc<Blueprint>>, SchemeeError> {
        self.store.get(name).map_err(store_error)
    }

    /// Remove the blueprint registered as `name`, returning whether it existed
    pub fn remove_blueprint(&mut self, name: &str) -> Result<bool, SchemeeError> {
        self.store.remove(name).map_err(store_error)
    }

    /// Names of all registered blueprints, sorted
    pub fn blueprint_names(&self) -> Result<Vec<String>, SchemeeError> {
        self.store.names().map_err(store_error)
    }

    /// Extraction settings in use
    pub fn config(&self) -> &ExtractorConfig {
        self.extractor.config()
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }
}

fn store_error<E: Display>(e: E) -> SchemeeError {
    SchemeeError::Store(e.to_string())
}
