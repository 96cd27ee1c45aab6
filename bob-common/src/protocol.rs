// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Wire protocol between the host tool and the device.
//!
//! Control flows one way only: the host writes a single command byte and the
//! device answers with newline-terminated ASCII records. There is no
//! end-of-transmission marker; the device simply stops talking and the host
//! notices when a read times out without a terminator.

// --- Serial settings ---

pub const BAUD_RATE: u32 = 9600;
pub const READ_TIMEOUT_MS: u64 = 1000;

pub const DEFAULT_PORT: &str = "/dev/ttyACM0";
pub const DEFAULT_OUT_DIR: &str = "./data";

// --- Record framing ---

/// Separates the key from the payload. Only the first occurrence counts.
pub const FIELD_SEPARATOR: u8 = b',';
pub const LINE_TERMINATOR: u8 = b'\n';

/// Extension of the per-key output files.
pub const OUTPUT_EXTENSION: &str = "csv";

// --- Commands ---

/// Control bytes understood by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceCommand {
    /// Dump every stored record.
    Read,
    /// Erase the internal flash.
    Clear,
}

impl DeviceCommand {
    pub const fn as_byte(self) -> u8 {
        match self {
            DeviceCommand::Read => b'r',
            DeviceCommand::Clear => b'c',
        }
    }
}
