// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Tests for the clear and collect workflows against an in-memory device.

use std::cell::Cell;

use bob_common::{clear_device, ClearOutcome, Collector, Confirm, Error, MemoryLink, Result};

/// Confirmation that always gives the same answer and counts prompts.
struct Scripted {
    answer: bool,
    asked: usize,
}

impl Confirm for Scripted {
    fn confirm(&mut self, _prompt: &str) -> Result<bool> {
        self.asked += 1;
        Ok(self.answer)
    }
}

// =============================================================================
// collect
// =============================================================================

#[test]
fn test_collect_sends_single_read_byte() {
    let mut collector = Collector::new(MemoryLink::new());
    collector.collect(|_| {}).unwrap();
    assert_eq!(collector.link().sent(), b"r");
}

#[test]
fn test_collect_groups_by_key() {
    let link = MemoryLink::with_lines(["temp,21.5\n", "temp,22.0\n", "hum,55\n"]);
    let mut collector = Collector::new(link);
    let map = collector.collect(|_| {}).unwrap();

    assert_eq!(map.get(b"temp"), Some(&b"21.5\n22.0\n"[..]));
    assert_eq!(map.get(b"hum"), Some(&b"55\n"[..]));
    assert_eq!(map.records(), 3);
}

#[test]
fn test_collect_stops_on_empty_read() {
    let mut link = MemoryLink::with_lines(["a,1\n"]);
    link.push_read("");
    link.push_read("a,2\n"); // never reached
    let mut collector = Collector::new(link);
    let map = collector.collect(|_| {}).unwrap();

    assert_eq!(map.get(b"a"), Some(&b"1\n"[..]));
    assert_eq!(collector.link().reads_served(), 2);
}

#[test]
fn test_collect_discards_partial_line() {
    let link = MemoryLink::with_lines(["a,1\n", "a,trunc"]);
    let mut collector = Collector::new(link);
    let map = collector.collect(|_| {}).unwrap();

    assert_eq!(map.get(b"a"), Some(&b"1\n"[..]));
    assert_eq!(map.records(), 1);
}

#[test]
fn test_collect_with_silent_device() {
    let mut collector = Collector::new(MemoryLink::new());
    let map = collector.collect(|_| {}).unwrap();
    assert!(map.is_empty());
}

#[test]
fn test_collect_payload_commas_survive() {
    let link = MemoryLink::with_lines(["imu,1,2,3\n"]);
    let mut collector = Collector::new(link);
    let map = collector.collect(|_| {}).unwrap();
    assert_eq!(map.get(b"imu"), Some(&b"1,2,3\n"[..]));
}

#[test]
fn test_collect_observer_sees_running_count() {
    let link = MemoryLink::with_lines(["a,1\n", "b,2\n", "a,3\n"]);
    let mut collector = Collector::new(link);
    let mut seen = Vec::new();
    collector.collect(|n| seen.push(n)).unwrap();
    assert_eq!(seen, vec![1, 2, 3]);
}

#[test]
fn test_collect_observer_does_not_change_result() {
    let lines = ["x,1\n", "y,2\n", "x,3\n"];
    let with = Collector::new(MemoryLink::with_lines(lines))
        .collect(|_| {})
        .unwrap();
    let calls = Cell::new(0);
    let without = Collector::new(MemoryLink::with_lines(lines))
        .collect(|_| calls.set(calls.get() + 1))
        .unwrap();
    assert_eq!(with, without);
    assert_eq!(calls.get(), 3);
}

#[test]
fn test_collect_transport_failure_is_connection_error() {
    let link = MemoryLink::with_lines(["a,1\n", "a,2\n"]).fail_read_at(1);
    let mut collector = Collector::new(link);
    let err = collector.collect(|_| {}).unwrap_err();
    assert!(matches!(err, Error::Connection { .. }));
}

#[test]
fn test_collect_malformed_line_aborts() {
    let link = MemoryLink::with_lines(["a,1\n", "no separator\n"]);
    let mut collector = Collector::new(link);
    let err = collector.collect(|_| {}).unwrap_err();
    assert!(matches!(err, Error::MalformedRecord { .. }));
}

// =============================================================================
// clear
// =============================================================================

#[test]
fn test_clear_with_force_sends_one_byte_without_prompt() {
    let mut collector = Collector::new(MemoryLink::with_lines(["a,1\n"]));
    let mut confirm = Scripted {
        answer: false,
        asked: 0,
    };
    let outcome = clear_device(&mut collector, true, &mut confirm).unwrap();

    assert_eq!(outcome, ClearOutcome::Cleared);
    assert_eq!(confirm.asked, 0);
    let link = collector.into_link();
    assert_eq!(link.sent(), b"c");
    assert_eq!(link.reads_served(), 0);
}

#[test]
fn test_clear_declined_sends_nothing() {
    let mut collector = Collector::new(MemoryLink::new());
    let mut confirm = Scripted {
        answer: false,
        asked: 0,
    };
    let outcome = clear_device(&mut collector, false, &mut confirm).unwrap();

    assert_eq!(outcome, ClearOutcome::Declined);
    assert_eq!(confirm.asked, 1);
    assert!(collector.link().sent().is_empty());
}

#[test]
fn test_clear_confirmed_sends_clear_byte() {
    let mut collector = Collector::new(MemoryLink::new());
    let mut confirm = |_: &str| true;
    let outcome = clear_device(&mut collector, false, &mut confirm).unwrap();

    assert_eq!(outcome, ClearOutcome::Cleared);
    assert_eq!(collector.link().sent(), b"c");
}

#[test]
fn test_collector_over_borrowed_link() {
    let mut link = MemoryLink::with_lines(["k,v\n"]);
    {
        let mut collector = Collector::new(&mut link);
        collector.collect(|_| {}).unwrap();
    }
    assert_eq!(link.sent(), b"r");
}
