//! Integrity envelope wrapped around a packed snapshot before it is stored.
//!
//! ```text
//! [magic "LMSN"][version u32][payload_len u64][crc64 u64][payload]
//! ```

use crate::error::{PersistenceError, Result};
use byteorder::{ByteOrder, LittleEndian};
use crc64fast::Digest;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EnvelopeHeader {
    pub magic: [u8; 4],
    pub version: u32,
    pub payload_len: u64,
    pub checksum: u64,
}

impl EnvelopeHeader {
    pub const SIZE: usize = 4 + 4 + 8 + 8; // 24 bytes
    pub const MAGIC: [u8; 4] = *b"LMSN";
    pub const VERSION: u32 = 1;

    pub fn new(payload: &[u8]) -> Self {
        Self {
            magic: Self::MAGIC,
            version: Self::VERSION,
            payload_len: payload.len() as u64,
            checksum: checksum(payload),
        }
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut buf = [0u8; Self::SIZE];
        buf[0..4].copy_from_slice(&self.magic);
        LittleEndian::write_u32(&mut buf[4..8], self.version);
        LittleEndian::write_u64(&mut buf[8..16], self.payload_len);
        LittleEndian::write_u64(&mut buf[16..24], self.checksum);
        buf
    }

    pub fn parse(blob: &[u8]) -> Result<Self> {
        if blob.len() < Self::SIZE {
            return Err(PersistenceError::Truncated {
                needed: Self::SIZE,
                available: blob.len(),
            });
        }

        let mut magic = [0u8; 4];
        magic.copy_from_slice(&blob[0..4]);
        if magic != Self::MAGIC {
            return Err(PersistenceError::InvalidMagic);
        }

        let version = LittleEndian::read_u32(&blob[4..8]);
        if version != Self::VERSION {
            return Err(PersistenceError::UnsupportedVersion(version));
        }

        Ok(Self {
            magic,
            version,
            payload_len: LittleEndian::read_u64(&blob[8..16]),
            checksum: LittleEndian::read_u64(&blob[16..24]),
        })
    }
}

pub fn checksum(data: &[u8]) -> u64 {
    let mut digest = Digest::new();
    digest.write(data);
    digest.sum64()
}

/// Prefixes `payload` with an envelope header.
pub fn seal(payload: &[u8]) -> Vec<u8> {
    let header = EnvelopeHeader::new(payload);
    let mut blob = Vec::with_capacity(EnvelopeHeader::SIZE + payload.len());
    blob.extend_from_slice(&header.to_bytes());
    blob.extend_from_slice(payload);
    blob
}

/// Validates the envelope and returns the payload it carries.
pub fn open(blob: &[u8]) -> Result<&[u8]> {
    open_with(blob, true).map(|(_, payload)| payload)
}

/// Like [`open`], with the checksum comparison optional.
pub fn open_with(blob: &[u8], verify_checksum: bool) -> Result<(EnvelopeHeader, &[u8])> {
    let header = EnvelopeHeader::parse(blob)?;
    let body = &blob[EnvelopeHeader::SIZE..];

    let payload_len = usize::try_from(header.payload_len).unwrap_or(usize::MAX);
    if payload_len > body.len() {
        return Err(PersistenceError::Truncated {
            needed: EnvelopeHeader::SIZE.saturating_add(payload_len),
            available: blob.len(),
        });
    }
    let payload = &body[..payload_len];

    if verify_checksum {
        let found = checksum(payload);
        if found != header.checksum {
            tracing::warn!(
                "Envelope checksum mismatch: expected {:016x}, found {:016x}",
                header.checksum,
                found
            );
            return Err(PersistenceError::ChecksumMismatch {
                expected: header.checksum,
                found,
            });
        }
    }

    Ok((header, payload))
}
