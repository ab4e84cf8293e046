use super::{read_file, write_file};
use linkmark_persistence::envelope;
use linkmark_snapshot::unpack;
use std::path::Path;

pub fn run(blob_path: &Path, state_path: &Path, events_path: &Path, raw: bool) -> anyhow::Result<()> {
    let blob = read_file(blob_path)?;
    let container = if raw { &blob[..] } else { envelope::open(&blob)? };

    let (state, event_log) = unpack(container)?;
    write_file(state_path, &state)?;
    write_file(events_path, &event_log)?;

    tracing::info!(
        "Unpacked {:?}: {} state bytes, {} event log bytes",
        blob_path,
        state.len(),
        event_log.len()
    );
    Ok(())
}
