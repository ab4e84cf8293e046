use super::write_file;
use anyhow::bail;
use linkmark_persistence::{SnapshotManager, StoreConfig};
use std::path::Path;

pub fn run(cfg: &StoreConfig, key: &str, state_path: &Path, events_path: &Path) -> anyhow::Result<()> {
    let manager = SnapshotManager::from_config(cfg);
    let Some(snapshot) = manager.load(key)? else {
        bail!("No snapshot named {} in {}", key, cfg.root.display());
    };

    write_file(state_path, &snapshot.state)?;
    write_file(events_path, &snapshot.event_log)?;
    println!(
        "Restored {}: {} state bytes, {} event log bytes",
        key,
        snapshot.state.len(),
        snapshot.event_log.len()
    );
    Ok(())
}
