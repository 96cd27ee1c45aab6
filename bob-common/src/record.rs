// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Splitting a device line into key and payload.

use crate::error::{Error, Result};
use crate::protocol::{FIELD_SEPARATOR, LINE_TERMINATOR};

/// One `<key>,<payload>` line, borrowed from the read buffer.
///
/// The payload keeps every byte after the first separator, including any
/// trailing `\r\n`, so concatenated payloads reproduce the device's lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub key: &'a [u8],
    pub payload: &'a [u8],
}

impl<'a> Record<'a> {
    /// Split `line` on its first `,`. Later commas belong to the payload.
    pub fn parse(line: &'a [u8]) -> Result<Self> {
        match line.iter().position(|&b| b == FIELD_SEPARATOR) {
            Some(idx) => Ok(Self {
                key: &line[..idx],
                payload: &line[idx + 1..],
            }),
            None => Err(Error::MalformedRecord {
                line: String::from_utf8_lossy(line).into_owned(),
            }),
        }
    }
}

/// Whether a read produced a complete line.
///
/// A read without a terminator means the device went quiet (timeout) and
/// marks the end of the dump.
pub fn is_terminated(line: &[u8]) -> bool {
    line.contains(&LINE_TERMINATOR)
}
