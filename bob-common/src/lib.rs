// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Common types and logic for the bob data download tool.
//!
//! The device streams `<key>,<payload>\n` records after receiving a single
//! read command byte and goes silent when done. This crate holds everything
//! that does not need a real serial port:
//! - `protocol`: control bytes and wire constants
//! - `record`: splitting a line into key and payload
//! - `aggregate`: per-key payload accumulation
//! - `link`: the connection abstraction plus an in-memory implementation
//! - `collector`: the clear / collect workflow
//! - `store`: appending aggregated payloads to `<out_dir>/<key>.csv`

pub mod aggregate;
pub mod collector;
pub mod error;
pub mod link;
pub mod protocol;
pub mod record;
pub mod store;

// Re-export commonly used types
pub use aggregate::AggregationMap;
pub use collector::{clear_device, ClearOutcome, Collector, Confirm};
pub use error::{Error, Result};
pub use link::{Link, MemoryLink};
pub use protocol::{DeviceCommand, BAUD_RATE, DEFAULT_OUT_DIR, DEFAULT_PORT, READ_TIMEOUT_MS};
pub use record::Record;
pub use store::{flush, output_path, FlushSummary, WrittenFile};
