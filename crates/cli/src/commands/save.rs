use super::read_file;
use linkmark_persistence::{SnapshotManager, StoreConfig};
use linkmark_snapshot::Snapshot;
use std::path::Path;

pub fn run(cfg: &StoreConfig, key: &str, state_path: &Path, events_path: &Path) -> anyhow::Result<usize> {
    let snapshot = Snapshot::new(read_file(state_path)?, read_file(events_path)?);
    let mut manager = SnapshotManager::from_config(cfg);
    let stored = manager.save(key, &snapshot)?;
    println!("Saved {} ({} bytes) to {}", key, stored, cfg.root.display());
    Ok(stored)
}
