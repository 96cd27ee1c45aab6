// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Appending aggregated payloads to per-key files.
//!
//! Each key maps to `<out_dir>/<key>.csv`, opened in append mode so repeated
//! downloads accumulate. There is no transaction across files: if a later
//! key fails, files written for earlier keys stay on disk.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::aggregate::AggregationMap;
use crate::error::{Error, Result};
use crate::protocol::OUTPUT_EXTENSION;

/// One appended file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub key: String,
    pub path: PathBuf,
    pub bytes: usize,
}

/// What a flush wrote, in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlushSummary {
    pub files: Vec<WrittenFile>,
}

impl FlushSummary {
    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(|f| f.bytes).sum()
    }
}

/// Path of the output file for `key`.
pub fn output_path(out_dir: &Path, key: &str) -> PathBuf {
    out_dir.join(format!("{key}.{OUTPUT_EXTENSION}"))
}

/// Write every key's payload to its file under `out_dir`.
///
/// The directory is created if missing. Keys are processed in sorted order
/// and the first failure aborts the remaining keys.
pub fn flush(map: &AggregationMap, out_dir: &Path) -> Result<FlushSummary> {
    fs::create_dir_all(out_dir).map_err(|e| Error::filesystem(out_dir, e))?;

    let mut summary = FlushSummary::default();
    for (key, payload) in map {
        let key = decode_key(key)?;
        let text = decode_ascii(&key, payload)?;

        let path = output_path(out_dir, &key);
        append(&path, text)?;
        debug!(path = %path.display(), bytes = text.len(), "appended");

        summary.files.push(WrittenFile {
            key,
            path,
            bytes: text.len(),
        });
    }

    info!(
        files = summary.files.len(),
        bytes = summary.total_bytes(),
        dir = %out_dir.display(),
        "flush finished"
    );
    Ok(summary)
}

fn append(path: &Path, text: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::filesystem(path, e))?;
    file.write_all(text.as_bytes())
        .map_err(|e| Error::filesystem(path, e))
}

/// Strict 7-bit ASCII decode. Reports the offset of the first bad byte.
fn decode_ascii<'a>(key: &str, bytes: &'a [u8]) -> Result<&'a str> {
    if let Some(pos) = bytes.iter().position(|b| !b.is_ascii()) {
        return Err(Error::Decode {
            key: key.to_string(),
            reason: format!("non-ASCII byte 0x{:02x} at offset {}", bytes[pos], pos),
        });
    }
    // ASCII is always valid UTF-8
    std::str::from_utf8(bytes).map_err(|e| Error::Decode {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

/// Decode a key and make sure it names a file inside the output directory.
fn decode_key(raw: &[u8]) -> Result<String> {
    let lossy = String::from_utf8_lossy(raw).into_owned();
    let key = decode_ascii(&lossy, raw)?;

    // The extension is always appended, so "", "." and ".." stay plain files
    let reason = if key.contains(['/', '\\']) {
        Some("key contains a path separator")
    } else if key.contains('\0') {
        Some("key contains a NUL byte")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(Error::Decode {
            key: lossy,
            reason: reason.to_string(),
        }),
        None => Ok(key.to_string()),
    }
}
