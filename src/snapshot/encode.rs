// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Snapshot encoding.

use byteorder::{ByteOrder, LittleEndian};

use crate::config::{HEADER_OVERHEAD, LENGTH_FIELD_SIZE, MAX_BUFFER_LEN};
use crate::error::{Result, SnapshotError};
use crate::snapshot::Field;

fn checked_len(field: Field, len: usize) -> Result<u32> {
    if len > MAX_BUFFER_LEN {
        return Err(SnapshotError::LengthOverflow { field, len });
    }
    Ok(len as u32)
}

/// Exact container size for payloads of the given lengths.
pub fn packed_len(state_len: usize, event_log_len: usize) -> Result<usize> {
    checked_len(Field::State, state_len)?;
    checked_len(Field::EventLog, event_log_len)?;
    HEADER_OVERHEAD
        .checked_add(state_len)
        .and_then(|n| n.checked_add(event_log_len))
        .ok_or(SnapshotError::LengthOverflow {
            field: Field::EventLog,
            len: event_log_len,
        })
}

/// writes a length prefix followed by its payload at offset
fn write_chunk(buf: &mut [u8], offset: &mut usize, len: u32, payload: &[u8]) {
    LittleEndian::write_u32(&mut buf[*offset..*offset + LENGTH_FIELD_SIZE], len);
    *offset += LENGTH_FIELD_SIZE;
    buf[*offset..*offset + payload.len()].copy_from_slice(payload);
    *offset += payload.len();
}

/// Writes the container for `state` and `event_log` into `out`.
///
/// Returns the number of bytes written. Bytes of `out` past that point are
/// left untouched.
pub fn pack_into(state: &[u8], event_log: &[u8], out: &mut [u8]) -> Result<usize> {
    let needed = packed_len(state.len(), event_log.len())?;
    if out.len() < needed {
        return Err(SnapshotError::BufferTooSmall {
            needed,
            available: out.len(),
        });
    }

    let mut offset = 0;
    write_chunk(out, &mut offset, state.len() as u32, state);
    write_chunk(out, &mut offset, event_log.len() as u32, event_log);
    Ok(offset)
}

/// Packs `state` and `event_log` into a freshly allocated container of
/// exactly `8 + state.len() + event_log.len()` bytes.
pub fn pack(state: &[u8], event_log: &[u8]) -> Result<Vec<u8>> {
    let total = packed_len(state.len(), event_log.len())?;
    let mut buf = vec![0u8; total];
    pack_into(state, event_log, &mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_packed_len_rejects_oversized_state() {
        let result = packed_len(MAX_BUFFER_LEN + 1, 0);
        assert_eq!(
            result,
            Err(SnapshotError::LengthOverflow {
                field: Field::State,
                len: MAX_BUFFER_LEN + 1,
            })
        );
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_packed_len_rejects_oversized_event_log() {
        let result = packed_len(0, MAX_BUFFER_LEN + 1);
        assert!(matches!(
            result,
            Err(SnapshotError::LengthOverflow { field: Field::EventLog, .. })
        ));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_packed_len_at_field_limit() {
        assert_eq!(packed_len(MAX_BUFFER_LEN, 0).unwrap(), MAX_BUFFER_LEN + 8);
    }

    #[test]
    fn test_pack_into_too_small() {
        let mut out = [0u8; 10];
        let result = pack_into(&[1, 2, 3], &[4], &mut out);
        assert_eq!(
            result,
            Err(SnapshotError::BufferTooSmall { needed: 12, available: 10 })
        );
    }

    #[test]
    fn test_pack_into_leaves_tail() {
        let mut out = [0xEEu8; 16];
        let written = pack_into(&[0xAB], &[], &mut out).unwrap();
        assert_eq!(written, 9);
        assert_eq!(&out[..9], &[1, 0, 0, 0, 0xAB, 0, 0, 0, 0]);
        assert!(out[9..].iter().all(|&b| b == 0xEE));
    }
}
