use super::{read_file, write_file};
use linkmark_persistence::envelope;
use linkmark_snapshot::pack;
use std::path::Path;

/// Packs two files into one snapshot blob. Returns the blob size.
pub fn run(state_path: &Path, events_path: &Path, out_path: &Path, raw: bool) -> anyhow::Result<usize> {
    let state = read_file(state_path)?;
    let event_log = read_file(events_path)?;

    let container = pack(&state, &event_log)?;
    let blob = if raw { container } else { envelope::seal(&container) };

    write_file(out_path, &blob)?;
    tracing::info!(
        "Packed {} state bytes and {} event log bytes into {:?} ({} bytes)",
        state.len(),
        event_log.len(),
        out_path,
        blob.len()
    );
    Ok(blob.len())
}
