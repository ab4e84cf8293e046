use linkmark_snapshot::SnapshotError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Invalid magic bytes in header")]
    InvalidMagic,
    #[error("Unsupported envelope version: {0}")]
    UnsupportedVersion(u32),
    #[error("Checksum mismatch: expected {expected:016x}, found {found:016x}")]
    ChecksumMismatch {
        expected: u64,
        found: u64,
    },
    #[error("Truncated blob: need {needed} bytes, have {available}")]
    Truncated {
        needed: usize,
        available: usize,
    },
    #[error("Invalid blob key: {0:?}")]
    InvalidKey(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Codec error: {0}")]
    Codec(#[from] SnapshotError),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, PersistenceError>;
