use super::read_file;
use linkmark_persistence::envelope::{self, EnvelopeHeader};
use linkmark_persistence::PersistenceError;
use linkmark_snapshot::read_header;
use std::path::Path;

pub fn run(blob_path: &Path) -> anyhow::Result<()> {
    let blob = read_file(blob_path)?;
    let header = EnvelopeHeader::parse(&blob)?;

    let container = match envelope::open(&blob) {
        Ok(container) => container,
        Err(e @ PersistenceError::ChecksumMismatch { .. }) => {
            println!("\nCORRUPTED\n");
            println!("{}\n", e);
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    let container_header = read_header(container)?;

    println!("\nVERIFIED\n");
    println!("Checksum:        {:016x} (CRC64)", header.checksum);
    println!("State bytes:     {}", container_header.state_len);
    println!("Event log bytes: {}\n", container_header.event_log_len);
    Ok(())
}
