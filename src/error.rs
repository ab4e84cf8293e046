// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use thiserror::Error;

use crate::snapshot::Field;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// A payload is too long for its 32-bit length prefix.
    #[error("{field} buffer of {len} bytes does not fit a 32-bit length field")]
    LengthOverflow { field: Field, len: usize },
    /// Declared lengths run past the end of the container.
    #[error("malformed container: {field} at offset {offset} needs {needed} bytes, {available} available")]
    MalformedContainer {
        field: Field,
        offset: usize,
        needed: usize,
        available: usize,
    },
    /// Output buffer handed to `pack_into` is too short.
    #[error("output buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, SnapshotError>;
