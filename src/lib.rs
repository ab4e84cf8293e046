// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
#![forbid(unsafe_code)]

//! linkmark-snapshot: a minimal binary container that carries a local
//! database's materialized state and its event log as one blob.
//!
//! ```text
//! [state_len u32 LE][state bytes][event_log_len u32 LE][event_log bytes]
//! ```

pub mod config;
pub mod error;
pub mod snapshot;

pub use error::{Result, SnapshotError};
pub use snapshot::decode::{read_header, unpack, ContainerHeader};
pub use snapshot::encode::{pack, pack_into, packed_len};
pub use snapshot::{Field, Snapshot};

#[cfg(test)]
pub mod tests;
