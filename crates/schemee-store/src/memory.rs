//! In-memory blueprint registry

use crate::StoreError;
use schemee_domain::traits::BlueprintStore;
use schemee_domain::Blueprint;
use std::collections::HashMap;
use std::sync::Arc;

/// Map-backed implementation of BlueprintStore
///
/// Writes to the same name replace each other; the last writer wins.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blueprints: HashMap<String, Arc<Blueprint>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered blueprints
    pub fn len(&self) -> usize {
        self.blueprints.len()
    }

    /// True when no blueprint is registered
    pub fn is_empty(&self) -> bool {
        self.blueprints.is_empty()
    }
}

impl BlueprintStore for MemoryStore {
    type Error = StoreError;

    fn put(&mut self, blueprint: Blueprint) -> Result<(), Self::Error> {
        self.blueprints
            .insert(blueprint.name.clone(), Arc::new(blueprint));
        Ok(())
    }

    fn get(&self, name: &str) -> Result<Option<Arc<Blueprint>>, Self::Error> {
        Ok(self.blueprints.get(name).cloned())
    }

    fn remove(&mut self, name: &str) -> Result<bool, Self::Error> {
        Ok(self.blueprints.remove(name).is_some())
    }

    fn names(&self) -> Result<Vec<String>, Self::Error> {
        let mut names: Vec<String> = self.blueprints.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemee_domain::Token;

    #[test]
    fn test_put_and_get() {
        let mut store = MemoryStore::new();
        store.put(Blueprint::new("a", Token::root())).unwrap();

        let found = store.get("a").unwrap().unwrap();
        assert_eq!(found.name, "a");
        assert!(store.get("b").unwrap().is_none());
    }

    #[test]
    fn test_last_writer_wins() {
        let mut store = MemoryStore::new();
        let first = Blueprint::new("a", Token::root());
        let second = Blueprint::new("a", Token::root());
        store.put(first).unwrap();
        store.put(second.clone()).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(*store.get("a").unwrap().unwrap(), second);
    }

    #[test]
    fn test_held_blueprint_survives_replacement() {
        let mut store = MemoryStore::new();
        store.put(Blueprint::new("a", Token::root())).unwrap();
        let held = store.get("a").unwrap().unwrap();

        store.put(Blueprint::new("a", Token::root())).unwrap();

        assert_ne!(*held, *store.get("a").unwrap().unwrap());
    }

    #[test]
    fn test_remove_and_names() {
        let mut store = MemoryStore::new();
        store.put(Blueprint::new("b", Token::root())).unwrap();
        store.put(Blueprint::new("a", Token::root())).unwrap();

        assert_eq!(store.names().unwrap(), vec!["a", "b"]);
        assert!(store.remove("a").unwrap());
        assert!(!store.remove("a").unwrap());
        assert_eq!(store.names().unwrap(), vec!["b"]);
    }
}
