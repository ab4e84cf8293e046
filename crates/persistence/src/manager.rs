use crate::config::StoreConfig;
use crate::envelope::{self, EnvelopeHeader};
use crate::error::Result;
use crate::store::{BlobStore, FsBlobStore};
use linkmark_snapshot::{read_header, Snapshot};

/// Header-level facts about a stored snapshot blob.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SnapshotInfo {
    pub stored_len: usize,
    pub envelope_version: u32,
    pub checksum: u64,
    pub state_len: u32,
    pub event_log_len: u32,
    pub trailing_len: usize,
}

/// Reads the envelope and container headers of `blob` without copying payloads.
pub fn inspect_blob(blob: &[u8], verify_checksum: bool) -> Result<SnapshotInfo> {
    let (header, container) = envelope::open_with(blob, verify_checksum)?;
    let container_header = read_header(container)?;
    Ok(SnapshotInfo {
        stored_len: blob.len(),
        envelope_version: header.version,
        checksum: header.checksum,
        state_len: container_header.state_len,
        event_log_len: container_header.event_log_len,
        trailing_len: container_header.trailing_len,
    })
}

/// Saves and restores snapshots through a [`BlobStore`].
pub struct SnapshotManager<S: BlobStore> {
    store: S,
    verify_checksum: bool,
}

impl SnapshotManager<FsBlobStore> {
    pub fn from_config(cfg: &StoreConfig) -> Self {
        Self {
            store: FsBlobStore::from_config(cfg),
            verify_checksum: cfg.verify_checksum,
        }
    }
}

impl<S: BlobStore> SnapshotManager<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            verify_checksum: true,
        }
    }

    pub fn with_verify_checksum(mut self, verify: bool) -> Self {
        self.verify_checksum = verify;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Packs, seals and stores `snapshot`. Returns the stored blob size.
    pub fn save(&mut self, key: &str, snapshot: &Snapshot) -> Result<usize> {
        let container = snapshot.pack()?;
        let blob = envelope::seal(&container);
        self.store.put(key, &blob)?;
        tracing::info!(
            "Saved snapshot {} ({} state bytes, {} event log bytes, {} stored)",
            key,
            snapshot.state.len(),
            snapshot.event_log.len(),
            blob.len()
        );
        Ok(blob.len())
    }

    /// Returns `None` when nothing is stored under `key`.
    pub fn load(&self, key: &str) -> Result<Option<Snapshot>> {
        let blob = match self.store.get(key)? {
            Some(blob) => blob,
            None => {
                tracing::debug!("No snapshot stored under {}", key);
                return Ok(None);
            }
        };
        let (_, container) = envelope::open_with(&blob, self.verify_checksum)?;
        let snapshot = Snapshot::unpack(container)?;
        tracing::info!(
            "Loaded snapshot {} ({} state bytes, {} event log bytes)",
            key,
            snapshot.state.len(),
            snapshot.event_log.len()
        );
        Ok(Some(snapshot))
    }

    pub fn inspect(&self, key: &str) -> Result<Option<SnapshotInfo>> {
        match self.store.get(key)? {
            Some(blob) => inspect_blob(&blob, self.verify_checksum).map(Some),
            None => Ok(None),
        }
    }

    pub fn delete(&mut self, key: &str) -> Result<bool> {
        self.store.delete(key)
    }

    pub fn keys(&self) -> Result<Vec<String>> {
        self.store.list()
    }
}
