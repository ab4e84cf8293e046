use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use super::read_file;
use linkmark_persistence::envelope::EnvelopeHeader;
use linkmark_persistence::manager::inspect_blob;
use linkmark_snapshot::read_header;
use std::path::Path;

/// Field/value rows describing a blob.
pub fn describe(blob: &[u8], raw: bool) -> anyhow::Result<Vec<(String, String)>> {
    let mut rows = vec![("Blob size".to_string(), blob.len().to_string())];

    if raw {
        let header = read_header(blob)?;
        rows.push(("Format".to_string(), "raw container".to_string()));
        rows.push(("State bytes".to_string(), header.state_len.to_string()));
        rows.push(("Event log bytes".to_string(), header.event_log_len.to_string()));
        rows.push(("Trailing bytes".to_string(), header.trailing_len.to_string()));
        return Ok(rows);
    }

    let info = inspect_blob(blob, false)?;
    rows.push((
        "Format".to_string(),
        format!(
            "{} v{}",
            String::from_utf8_lossy(&EnvelopeHeader::MAGIC),
            info.envelope_version
        ),
    ));
    rows.push(("Checksum".to_string(), format!("{:016x}", info.checksum)));
    rows.push(("State bytes".to_string(), info.state_len.to_string()));
    rows.push(("Event log bytes".to_string(), info.event_log_len.to_string()));
    rows.push(("Trailing bytes".to_string(), info.trailing_len.to_string()));
    Ok(rows)
}

pub fn run(blob_path: &Path, raw: bool, json: bool) -> anyhow::Result<()> {
    let blob = read_file(blob_path)?;

    if json {
        let value = if raw {
            let header = read_header(&blob)?;
            serde_json::json!({
                "stored_len": blob.len(),
                "state_len": header.state_len,
                "event_log_len": header.event_log_len,
                "trailing_len": header.trailing_len,
            })
        } else {
            serde_json::to_value(inspect_blob(&blob, false)?)?
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Field", "Value"]);
    for (field, value) in describe(&blob, raw)? {
        table.add_row(vec![field, value]);
    }

    println!("\nSnapshot {}\n", blob_path.display());
    println!("{table}\n");
    Ok(())
}
