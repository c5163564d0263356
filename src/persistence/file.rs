//! One JSON file per collection inside a data directory
//!
//! Writes go to `<collection>.json.tmp` first and are renamed into place, so
//! a crash mid-write leaves the previous document intact.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{Store, StoreError, validate_collection};

#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Use (and create if needed) `root` as the data directory
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, collection: &str) -> Result<PathBuf, StoreError> {
        validate_collection(collection)?;
        Ok(self.root.join(format!("{collection}.json")))
    }
}

impl Store for FileStore {
    fn get(&self, collection: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(collection)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, collection: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(collection)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&mut self, collection: &str) -> Result<(), StoreError> {
        let path = self.path_for(collection)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
