// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Per-key payload accumulation.

use std::collections::btree_map::{self, BTreeMap};

use crate::record::Record;

/// Payload bytes grouped by key, concatenated in arrival order.
///
/// Keys are kept sorted so files are always written in the same order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AggregationMap {
    entries: BTreeMap<Vec<u8>, Vec<u8>>,
    records: usize,
}

impl AggregationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the record's payload to its key, creating the entry if needed.
    pub fn push(&mut self, record: Record<'_>) {
        match self.entries.get_mut(record.key) {
            Some(existing) => existing.extend_from_slice(record.payload),
            None => {
                self.entries
                    .insert(record.key.to_vec(), record.payload.to_vec());
            }
        }
        self.records += 1;
    }

    pub fn get(&self, key: &[u8]) -> Option<&[u8]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Vec<u8>, Vec<u8>> {
        self.entries.iter()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of records pushed so far.
    pub fn records(&self) -> usize {
        self.records
    }

    pub fn total_payload_bytes(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

impl<'a> IntoIterator for &'a AggregationMap {
    type Item = (&'a Vec<u8>, &'a Vec<u8>);
    type IntoIter = btree_map::Iter<'a, Vec<u8>, Vec<u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
