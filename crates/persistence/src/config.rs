use crate::error::{PersistenceError, Result};
use std::env;
use std::path::PathBuf;

pub const ENV_SNAPSHOT_DIR: &str = "LINKMARK_SNAPSHOT_DIR";
pub const ENV_KEEP_PREVIOUS: &str = "LINKMARK_KEEP_PREVIOUS";
pub const ENV_VERIFY_CHECKSUM: &str = "LINKMARK_VERIFY_CHECKSUM";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding one file per snapshot key.
    pub root: PathBuf,
    /// Rotate the replaced blob to `<key>.prev` on overwrite.
    pub keep_previous: bool,
    pub verify_checksum: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("snapshots"),
            keep_previous: true,
            verify_checksum: true,
        }
    }
}

impl StoreConfig {
    /// Defaults overlaid with `LINKMARK_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(dir) = lookup(ENV_SNAPSHOT_DIR) {
            if dir.is_empty() {
                return Err(PersistenceError::InvalidConfig(format!("{} is empty", ENV_SNAPSHOT_DIR)));
            }
            cfg.root = PathBuf::from(dir);
        }
        if let Some(v) = lookup(ENV_KEEP_PREVIOUS) {
            cfg.keep_previous = parse_flag(ENV_KEEP_PREVIOUS, &v)?;
        }
        if let Some(v) = lookup(ENV_VERIFY_CHECKSUM) {
            cfg.verify_checksum = parse_flag(ENV_VERIFY_CHECKSUM, &v)?;
        }
        Ok(cfg)
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => Err(PersistenceError::InvalidConfig(format!(
            "{} must be a boolean, got {:?}",
            name, other
        ))),
    }
}
