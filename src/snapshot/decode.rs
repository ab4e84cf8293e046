// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Snapshot decoding.
//!
//! Every length prefix and payload is bounds-checked before it is sliced.
//! Bytes after the event log payload are ignored.

use byteorder::{ByteOrder, LittleEndian};

use crate::config::LENGTH_FIELD_SIZE;
use crate::error::{Result, SnapshotError};
use crate::snapshot::Field;

/// Lengths declared by a container, without its payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader {
    pub state_len: u32,
    pub event_log_len: u32,
    /// Bytes following the event log payload.
    pub trailing_len: usize,
}

impl ContainerHeader {
    pub fn state_range(&self) -> core::ops::Range<usize> {
        LENGTH_FIELD_SIZE..LENGTH_FIELD_SIZE + self.state_len as usize
    }

    pub fn event_log_range(&self) -> core::ops::Range<usize> {
        let start = self.state_range().end + LENGTH_FIELD_SIZE;
        start..start + self.event_log_len as usize
    }

    /// Bytes the container actually uses, trailer excluded.
    pub fn used_len(&self) -> usize {
        self.event_log_range().end
    }
}

fn take<'a>(buf: &'a [u8], offset: &mut usize, len: usize, field: Field) -> Result<&'a [u8]> {
    let available = buf.len().saturating_sub(*offset);
    if len > available {
        return Err(SnapshotError::MalformedContainer {
            field,
            offset: *offset,
            needed: len,
            available,
        });
    }
    let chunk = &buf[*offset..*offset + len];
    *offset += len;
    Ok(chunk)
}

fn read_u32(buf: &[u8], offset: &mut usize, field: Field) -> Result<u32> {
    let bytes = take(buf, offset, LENGTH_FIELD_SIZE, field)?;
    Ok(LittleEndian::read_u32(bytes))
}

/// Walks the container and returns borrowed views of both payloads.
fn split(container: &[u8]) -> Result<(&[u8], &[u8], usize)> {
    let mut offset = 0;
    let state_len = read_u32(container, &mut offset, Field::StateLen)? as usize;
    let state = take(container, &mut offset, state_len, Field::State)?;
    let event_log_len = read_u32(container, &mut offset, Field::EventLogLen)? as usize;
    let event_log = take(container, &mut offset, event_log_len, Field::EventLog)?;
    Ok((state, event_log, offset))
}

/// Reads the two length prefixes of `container`.
pub fn read_header(container: &[u8]) -> Result<ContainerHeader> {
    let (state, event_log, used) = split(container)?;
    Ok(ContainerHeader {
        state_len: state.len() as u32,
        event_log_len: event_log.len() as u32,
        trailing_len: container.len() - used,
    })
}

/// Unpacks a container into independent copies of the state and event log.
pub fn unpack(container: &[u8]) -> Result<(Vec<u8>, Vec<u8>)> {
    let (state, event_log, _) = split(container)?;
    Ok((state.to_vec(), event_log.to_vec()))
}
