// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Layout constants.

/// Size in bytes of each length prefix.
pub const LENGTH_FIELD_SIZE: usize = 4;

/// Fixed overhead of a container: the two length prefixes.
pub const HEADER_OVERHEAD: usize = 2 * LENGTH_FIELD_SIZE;

/// Largest payload a length prefix can describe.
pub const MAX_BUFFER_LEN: usize = u32::MAX as usize;
