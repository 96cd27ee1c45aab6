// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Clear and collect workflows.
//!
//! The collector owns the link for the whole run. Collection sends the read
//! command, then pulls lines until one comes back without a terminator,
//! which is the only end-of-dump signal the device gives.

use tracing::{debug, info, warn};

use crate::aggregate::AggregationMap;
use crate::error::Result;
use crate::link::Link;
use crate::protocol::DeviceCommand;
use crate::record::{is_terminated, Record};

/// Drives one device over an exclusively owned link.
pub struct Collector<L: Link> {
    link: L,
}

impl<L: Link> Collector<L> {
    pub fn new(link: L) -> Self {
        Self { link }
    }

    /// Ask the device to erase its flash. No acknowledgement is read.
    pub fn clear(&mut self) -> Result<()> {
        self.link.send(DeviceCommand::Clear)?;
        info!("clear command sent");
        Ok(())
    }

    /// Request a dump and group every record by key.
    ///
    /// `observer` is called after each record with the running count. It only
    /// feeds progress displays and never affects the returned map.
    pub fn collect<F>(&mut self, mut observer: F) -> Result<AggregationMap>
    where
        F: FnMut(usize),
    {
        self.link.send(DeviceCommand::Read)?;

        let mut map = AggregationMap::new();
        let mut line = Vec::with_capacity(128);

        loop {
            self.link.read_line(&mut line)?;
            if !is_terminated(&line) {
                if !line.is_empty() {
                    debug!(bytes = line.len(), "discarding unterminated read");
                }
                break;
            }

            let record = Record::parse(&line)?;
            debug!(
                key = %String::from_utf8_lossy(record.key),
                bytes = record.payload.len(),
                "record"
            );
            map.push(record);
            observer(map.records());
        }

        info!(records = map.records(), keys = map.len(), "collection finished");
        Ok(map)
    }

    pub fn link(&self) -> &L {
        &self.link
    }

    pub fn into_link(self) -> L {
        self.link
    }
}

/// Interactive confirmation before a destructive command.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(self(prompt))
    }
}

/// Result of a clear request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    Cleared,
    /// The user said no; nothing was sent.
    Declined,
}

pub const CLEAR_PROMPT: &str = "This will erase all data stored on the device. Continue?";

/// Clear the device, asking `confirm` first unless `force` is set.
pub fn clear_device<L, C>(
    collector: &mut Collector<L>,
    force: bool,
    confirm: &mut C,
) -> Result<ClearOutcome>
where
    L: Link,
    C: Confirm + ?Sized,
{
    if !force && !confirm.confirm(CLEAR_PROMPT)? {
        warn!("clear declined, device left untouched");
        return Ok(ClearOutcome::Declined);
    }
    collector.clear()?;
    Ok(ClearOutcome::Cleared)
}
