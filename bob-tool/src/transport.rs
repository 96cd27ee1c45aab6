// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Serial transport for talking to the device.

use std::io::{self, Read, Write};
use std::time::Duration;

use serialport::SerialPort;

use bob_common::{DeviceCommand, Error, Link, Result};

/// USB CDC link to a bob board.
///
/// Generic over the port so the line reader can be exercised without
/// hardware; production code uses `Box<dyn SerialPort>`.
pub struct SerialLink<P = Box<dyn SerialPort>> {
    port: P,
    name: String,
}

impl SerialLink {
    /// Open `port_name` with the given baud rate and per-read timeout.
    pub fn open(port_name: &str, baud_rate: u32, timeout_ms: u64) -> Result<Self> {
        let port = serialport::new(port_name, baud_rate)
            .timeout(Duration::from_millis(timeout_ms))
            .open()
            .map_err(|e| {
                Error::connection(
                    format!("Failed to open serial port {}", port_name),
                    e.into(),
                )
            })?;

        Ok(Self::from_port(port, port_name))
    }
}

impl<P> SerialLink<P> {
    pub fn from_port(port: P, name: impl Into<String>) -> Self {
        Self {
            port,
            name: name.into(),
        }
    }

    /// Get the port name.
    pub fn port_name(&self) -> &str {
        &self.name
    }
}

impl<P: Read + Write> Link for SerialLink<P> {
    fn send(&mut self, cmd: DeviceCommand) -> Result<()> {
        self.port
            .write_all(&[cmd.as_byte()])
            .and_then(|()| self.port.flush())
            .map_err(|e| Error::connection("Failed to write to serial port", e))
    }

    fn read_line(&mut self, buf: &mut Vec<u8>) -> Result<()> {
        buf.clear();
        let mut byte = [0u8; 1];

        // Read until newline; a timeout ends the line early
        loop {
            match self.port.read(&mut byte) {
                Ok(1) => {
                    buf.push(byte[0]);
                    if byte[0] == b'\n' {
                        return Ok(());
                    }
                }
                // Some drivers report a timeout as a zero-length read
                Ok(_) => return Ok(()),
                Err(e) if e.kind() == io::ErrorKind::TimedOut => return Ok(()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::connection("Serial read error", e)),
            }
        }
    }
}
