// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Download tool for the internal flash of bob boards via USB CDC.
//!
//! Usage:
//!   bob-tool                          # read /dev/ttyACM0 into ./data
//!   bob-tool /dev/ttyACM1 ./flight-3
//!   bob-tool /dev/ttyACM0 --clear     # erase, asks first
//!   bob-tool /dev/ttyACM0 -c -f       # erase without asking

mod cli;
mod commands;
mod logging;
mod prompt;
mod transport;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    logging::init(args.verbose);
    cli::run(args)
}
