// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Connection abstraction between the collector and the device.

use std::collections::VecDeque;
use std::io;

use crate::error::{Error, Result};
use crate::protocol::DeviceCommand;

/// A byte channel to the device.
pub trait Link {
    /// Write one control byte.
    fn send(&mut self, cmd: DeviceCommand) -> Result<()>;

    /// Read one line into `buf`, replacing its contents.
    ///
    /// On success `buf` holds the bytes up to and including `\n`. When the
    /// read timeout expires first, `buf` holds whatever arrived (possibly
    /// nothing) and `Ok` is still returned: the caller decides that an
    /// unterminated line ends the stream. Only transport failures are errors.
    fn read_line(&mut self, buf: &mut Vec<u8>) -> Result<()>;
}

impl<L: Link + ?Sized> Link for &mut L {
    fn send(&mut self, cmd: DeviceCommand) -> Result<()> {
        (**self).send(cmd)
    }

    fn read_line(&mut self, buf: &mut Vec<u8>) -> Result<()> {
        (**self).read_line(buf)
    }
}

/// Scripted in-memory device.
///
/// Hands out queued reads in order, then empty reads as if the device had
/// gone silent. Every byte sent is recorded.
#[derive(Debug, Default)]
pub struct MemoryLink {
    reads: VecDeque<Vec<u8>>,
    sent: Vec<u8>,
    reads_served: usize,
    fail_read_at: Option<usize>,
}

impl MemoryLink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a link that will answer with `lines`, one per read.
    pub fn with_lines<I, B>(lines: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        let mut link = Self::new();
        for line in lines {
            link.push_read(line);
        }
        link
    }

    /// Queue the bytes returned by a future read. They need not end in `\n`.
    pub fn push_read(&mut self, bytes: impl AsRef<[u8]>) {
        self.reads.push_back(bytes.as_ref().to_vec());
    }

    /// Make the `n`th read (zero-based) fail as if the device was unplugged.
    pub fn fail_read_at(mut self, n: usize) -> Self {
        self.fail_read_at = Some(n);
        self
    }

    /// Bytes written to the device so far.
    pub fn sent(&self) -> &[u8] {
        &self.sent
    }

    pub fn reads_served(&self) -> usize {
        self.reads_served
    }
}

impl Link for MemoryLink {
    fn send(&mut self, cmd: DeviceCommand) -> Result<()> {
        self.sent.push(cmd.as_byte());
        Ok(())
    }

    fn read_line(&mut self, buf: &mut Vec<u8>) -> Result<()> {
        buf.clear();
        let n = self.reads_served;
        self.reads_served += 1;

        if self.fail_read_at == Some(n) {
            return Err(Error::connection(
                "Serial read error",
                io::Error::new(io::ErrorKind::BrokenPipe, "device disconnected"),
            ));
        }

        if let Some(bytes) = self.reads.pop_front() {
            buf.extend_from_slice(&bytes);
        }
        Ok(())
    }
}
