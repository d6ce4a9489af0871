//! File-backed blueprint registry

use crate::{validate_name, StoreError};
use schemee_domain::traits::BlueprintStore;
use schemee_domain::Blueprint;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

const EXTENSION: &str = "json";

/// Directory-backed implementation of BlueprintStore
///
/// Each blueprint lives in `<dir>/<name>.json`. The directory is created on
/// the first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use schemee_store::FileStore;
    ///
    /// let store = FileStore::new("blueprints");
    /// ```
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Directory holding the blueprint files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, name: &str) -> Result<PathBuf, StoreError> {
        validate_name(name)?;
        Ok(self.dir.join(format!("{}.{}", name, EXTENSION)))
    }
}

impl BlueprintStore for FileStore {
    type Error = StoreError;

    fn put(&mut self, blueprint: Blueprint) -> Result<(), Self::Error> {
        let path = self.path_for(&blueprint.name)?;
        fs::create_dir_all(&self.dir)?;

        // Write beside the target and rename so readers never see half a file
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(&blueprint)?)?;
        fs::rename(&tmp, &path)?;

        debug!("Wrote blueprint '{}' to {}", blueprint.name, path.display());
        Ok(())
    }

    fn get(&self, name: &str) -> Result<Option<Arc<Blueprint>>, Self::Error> {
        let path = self.path_for(name)?;
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let blueprint: Blueprint = serde_json::from_str(&text)?;
        Ok(Some(Arc::new(blueprint)))
    }

    fn remove(&mut self, name: &str) -> Result<bool, Self::Error> {
        let path = self.path_for(name)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn names(&self) -> Result<Vec<String>, Self::Error> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                if validate_name(stem).is_ok() {
                    names.push(stem.to_string());
                }
            }
        }

        names.sort();
        Ok(names)
    }
}
