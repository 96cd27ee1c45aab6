// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command implementations for the clear and download workflows.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use bob_common::{clear_device, flush, ClearOutcome, Collector, Confirm, Link};

/// Download every record from the device and append it under `out_dir`.
pub fn collect<L: Link>(collector: &mut Collector<L>, out_dir: &Path) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(100));

    let map = match collector.collect(|records| {
        spinner.set_message(format!("{} records read.", records));
    }) {
        Ok(map) => map,
        Err(e) => {
            spinner.abandon();
            return Err(e).context("Failed to download records");
        }
    };
    spinner.finish_and_clear();

    println!(
        "{} records read ({} bytes)! Outputting to {}",
        map.records(),
        map.total_payload_bytes(),
        out_dir.display()
    );

    let summary = flush(&map, out_dir)
        .with_context(|| format!("Failed to write records to {}", out_dir.display()))?;

    for file in &summary.files {
        println!("  {} ({} bytes)", file.path.display(), file.bytes);
    }

    Ok(())
}

/// Erase the device's flash, asking first unless `force` is set.
pub fn clear<L, C>(collector: &mut Collector<L>, force: bool, confirm: &mut C) -> Result<()>
where
    L: Link,
    C: Confirm,
{
    match clear_device(collector, force, confirm).context("Failed to clear device")? {
        ClearOutcome::Cleared => println!("Flash cleared."),
        ClearOutcome::Declined => println!("Aborted, device left untouched."),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use bob_common::MemoryLink;
    use tempfile::tempdir;

    #[test]
    fn test_collect_writes_files() {
        let dir = tempdir().unwrap();
        let link = MemoryLink::with_lines(["temp,21.5\n", "temp,22.0\n", "hum,55\n"]);
        let mut collector = Collector::new(link);

        collect(&mut collector, dir.path()).unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("temp.csv")).unwrap(),
            "21.5\n22.0\n"
        );
        assert_eq!(fs::read_to_string(dir.path().join("hum.csv")).unwrap(), "55\n");
    }

    #[test]
    fn test_collect_reports_decode_failure() {
        let dir = tempdir().unwrap();
        let link = MemoryLink::with_lines([&b"temp,\xc2\xb0\n"[..]]);
        let mut collector = Collector::new(link);

        let err = collect(&mut collector, dir.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to write records"));
    }

    #[test]
    fn test_clear_declined_sends_nothing() {
        let mut collector = Collector::new(MemoryLink::new());
        let mut decline = |_: &str| false;

        clear(&mut collector, false, &mut decline).unwrap();

        assert!(collector.link().sent().is_empty());
    }

    #[test]
    fn test_clear_forced_sends_clear_only() {
        let mut collector = Collector::new(MemoryLink::with_lines(["a,1\n"]));
        let mut never = |_: &str| -> bool { panic!("prompted despite --force") };

        clear(&mut collector, true, &mut never).unwrap();

        assert_eq!(collector.link().sent(), b"c");
        assert_eq!(collector.link().reads_served(), 0);
    }
}
