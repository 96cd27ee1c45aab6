// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command-line interface definitions.

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};
use tracing::info;

use bob_common::{
    Collector, Confirm, Link, BAUD_RATE, DEFAULT_OUT_DIR, DEFAULT_PORT, READ_TIMEOUT_MS,
};

use crate::commands;
use crate::prompt::StdinConfirm;
use crate::transport::SerialLink;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "bob-tool")]
#[command(about = "Tool for managing the internal flash of the bob series of boards")]
#[command(long_about = "Tool for managing the internal flash of the bob series of boards.\n\
Default behaviour is to download data from /dev/ttyACM0 and save it into ./data.\n\
This may be customised with the arguments below.")]
#[command(after_help = "Claire Hinton, 2023")]
pub struct Cli {
    /// The serial port that bob is connected to
    #[arg(default_value = DEFAULT_PORT)]
    pub tty: String,

    /// The directory to save data to
    #[arg(value_name = "OUT_DIR", default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Clear the flash. Will prompt for confirmation unless -f is set
    #[arg(short, long)]
    pub clear: bool,

    /// Skip asking for confirmation
    #[arg(short, long)]
    pub force: bool,

    /// Serial baud rate
    #[arg(long, default_value_t = BAUD_RATE)]
    pub baud: u32,

    /// Silence after which the device is considered done, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = READ_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Execute the parsed CLI command.
pub fn run(cli: Cli) -> Result<()> {
    let link = SerialLink::open(&cli.tty, cli.baud, cli.timeout_ms)?;
    info!(
        port = link.port_name(),
        baud = cli.baud,
        timeout_ms = cli.timeout_ms,
        "serial port open"
    );

    execute(&cli, &mut Collector::new(link), &mut StdinConfirm::stdin())
}

/// Dispatch to the clear or download workflow over an already open link.
pub fn execute<L, C>(cli: &Cli, collector: &mut Collector<L>, confirm: &mut C) -> Result<()>
where
    L: Link,
    C: Confirm,
{
    if cli.clear {
        commands::clear(collector, cli.force, confirm)
    } else {
        commands::collect(collector, &cli.out_dir)
    }
}
