//! Blob storage backends. Each snapshot is stored as one opaque blob
//! under a caller-chosen key.

use crate::config::StoreConfig;
use crate::error::{PersistenceError, Result};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const TMP_SUFFIX: &str = ".tmp";
const PREV_SUFFIX: &str = ".prev";

pub trait BlobStore {
    /// Stores `bytes` under `key`, replacing any previous blob.
    fn put(&mut self, key: &str, bytes: &[u8]) -> Result<()>;
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;
    /// Returns whether a blob was removed.
    fn delete(&mut self, key: &str) -> Result<bool>;
    /// Stored keys in ascending order.
    fn list(&self) -> Result<Vec<String>>;
}

/// Keys are plain file names: `[A-Za-z0-9._-]`, not `.` or `..`, and
/// without the suffixes reserved for temporary and rotated files.
pub fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key != "."
        && key != ".."
        && !key.ends_with(TMP_SUFFIX)
        && !key.ends_with(PREV_SUFFIX)
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-'));
    if valid {
        Ok(())
    } else {
        Err(PersistenceError::InvalidKey(key.to_string()))
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryBlobStore {
    blobs: BTreeMap<String, Vec<u8>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryBlobStore {
    fn put(&mut self, key: &str, bytes: &[u8]) -> Result<()> {
        validate_key(key)?;
        self.blobs.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        validate_key(key)?;
        Ok(self.blobs.get(key).cloned())
    }

    fn delete(&mut self, key: &str) -> Result<bool> {
        validate_key(key)?;
        Ok(self.blobs.remove(key).is_some())
    }

    fn list(&self) -> Result<Vec<String>> {
        Ok(self.blobs.keys().cloned().collect())
    }
}

/// One file per key under a root directory, replaced atomically.
#[derive(Debug, Clone)]
pub struct FsBlobStore {
    root: PathBuf,
    keep_previous: bool,
}

impl FsBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            keep_previous: true,
        }
    }

    pub fn from_config(cfg: &StoreConfig) -> Self {
        Self {
            root: cfg.root.clone(),
            keep_previous: cfg.keep_previous,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(key))
    }

    fn sibling(&self, key: &str, suffix: &str) -> PathBuf {
        self.root.join(format!("{}{}", key, suffix))
    }
}

impl BlobStore for FsBlobStore {
    fn put(&mut self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root)?;

        let tmp_path = self.sibling(key, TMP_SUFFIX);
        {
            let mut file = File::create(&tmp_path)?;
            file.write_all(bytes)?;
            file.sync_data()?;
        }

        if self.keep_previous && path.exists() {
            let prev_path = self.sibling(key, PREV_SUFFIX);
            match fs::rename(&path, &prev_path) {
                Ok(()) => tracing::debug!("Rotated {:?} to {:?}", path, prev_path),
                Err(e) => tracing::warn!("Could not keep previous blob for {}: {}", key, e),
            }
        }

        fs::rename(&tmp_path, &path)?;
        tracing::debug!("Stored {} bytes at {:?}", bytes.len(), path);
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path_for(key)?;
        match fs::read(&path) {
            Ok(bytes) => {
                tracing::debug!("Read {} bytes from {:?}", bytes.len(), path);
                Ok(Some(bytes))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn delete(&mut self, key: &str) -> Result<bool> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn list(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut keys = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if validate_key(name).is_ok() {
                    keys.push(name.to_string());
                }
            }
        }
        keys.sort();
        Ok(keys)
    }
}
