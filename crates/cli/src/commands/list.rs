use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use linkmark_persistence::{SnapshotManager, StoreConfig};

pub fn run(cfg: &StoreConfig) -> anyhow::Result<Vec<String>> {
    let manager = SnapshotManager::from_config(cfg);
    let keys = manager.keys()?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Key", "Status", "Stored", "State", "Event Log", "Modified"]);

    for key in &keys {
        let modified = manager
            .store()
            .path_for(key)
            .ok()
            .and_then(|p| std::fs::metadata(p).ok())
            .and_then(|m| m.modified().ok())
            .map(|t| {
                chrono::DateTime::<chrono::Utc>::from(t)
                    .to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
            })
            .unwrap_or_default();

        match manager.inspect(key) {
            Ok(Some(info)) => {
                table.add_row(vec![
                    key.clone(),
                    "OK".to_string(),
                    info.stored_len.to_string(),
                    info.state_len.to_string(),
                    info.event_log_len.to_string(),
                    modified,
                ]);
            }
            Ok(None) => {
                table.add_row(vec![key.clone(), "MISSING".to_string()]);
            }
            Err(e) => {
                table.add_row(vec![key.clone(), "CORRUPT".to_string(), e.to_string()]);
            }
        }
    }

    println!("\nSnapshots in {}\n", cfg.root.display());
    println!("{table}\n");

    Ok(keys)
}
