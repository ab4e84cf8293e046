// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Snapshot container: the (state, event log) pair and its wire form.

pub mod decode;
pub mod encode;

use core::fmt;

use crate::error::Result;

/// Identifies a region of the container in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    StateLen,
    State,
    EventLogLen,
    EventLog,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::StateLen => "state length",
            Field::State => "state",
            Field::EventLogLen => "event log length",
            Field::EventLog => "event log",
        };
        f.write_str(name)
    }
}

/// Owned copy of a database's state bytes and event log bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub state: Vec<u8>,
    pub event_log: Vec<u8>,
}

impl Snapshot {
    pub fn new(state: impl Into<Vec<u8>>, event_log: impl Into<Vec<u8>>) -> Self {
        Self {
            state: state.into(),
            event_log: event_log.into(),
        }
    }

    pub fn pack(&self) -> Result<Vec<u8>> {
        encode::pack(&self.state, &self.event_log)
    }

    pub fn unpack(container: &[u8]) -> Result<Self> {
        let (state, event_log) = decode::unpack(container)?;
        Ok(Self { state, event_log })
    }

    /// Size of the container `pack` would produce.
    pub fn encoded_len(&self) -> Result<usize> {
        encode::packed_len(self.state.len(), self.event_log.len())
    }

    pub fn into_parts(self) -> (Vec<u8>, Vec<u8>) {
        (self.state, self.event_log)
    }
}
