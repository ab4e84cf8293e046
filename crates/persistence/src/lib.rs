pub mod config;
pub mod envelope;
pub mod error;
pub mod fixtures;
pub mod manager;
pub mod store;

pub use config::StoreConfig;
pub use error::{PersistenceError, Result};
pub use manager::{SnapshotInfo, SnapshotManager};
pub use store::{BlobStore, FsBlobStore, MemoryBlobStore};
