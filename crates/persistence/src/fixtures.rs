use crate::config::StoreConfig;
use crate::error::Result;
use crate::manager::SnapshotManager;
use linkmark_snapshot::Snapshot;

use std::path::{Path, PathBuf};

pub struct SampleStore {
    pub root: PathBuf,
    pub keys: Vec<String>,
}

/// Builds a small bookmark-style event log: one line per added link.
pub fn sample_event_log(links: usize) -> Vec<u8> {
    let mut log = Vec::new();
    for i in 1..=links {
        log.extend_from_slice(format!("{}\tlink.added\thttps://example.com/{}\n", i, i).as_bytes());
    }
    log
}

pub fn sample_state(links: usize) -> Vec<u8> {
    format!("{{\"links\":{},\"tags\":[\"rust\",\"reading\"]}}", links).into_bytes()
}

/// Writes a store holding an empty snapshot, a small one, and one saved twice.
pub fn generate_sample_store(dir: &Path) -> Result<SampleStore> {
    let cfg = StoreConfig {
        root: dir.to_path_buf(),
        ..StoreConfig::default()
    };
    let mut manager = SnapshotManager::from_config(&cfg);

    manager.save("empty", &Snapshot::default())?;
    manager.save("small", &Snapshot::new(sample_state(3), sample_event_log(3)))?;
    manager.save("rotated", &Snapshot::new(sample_state(1), sample_event_log(1)))?;
    manager.save("rotated", &Snapshot::new(sample_state(5), sample_event_log(5)))?;

    Ok(SampleStore {
        root: dir.to_path_buf(),
        keys: vec!["empty".to_string(), "rotated".to_string(), "small".to_string()],
    })
}
