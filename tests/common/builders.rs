#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use run_report::collector::collector::Collector;
use run_report::collector::outcome::{OutcomeKind, RawOutcome};
use run_report::collector::record::TestRecord;

pub fn fixed_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(12, 30, 45)
        .unwrap()
}

pub fn passed(name: &str, duration_ms: i64) -> RawOutcome {
    RawOutcome::new(name, "com.example.CalculatorTest", OutcomeKind::Success)
        .with_timing(1_000, 1_000 + duration_ms)
        .with_groups(&["smoke"])
}

pub fn failed(name: &str, message: Option<&str>, trace: &[&str]) -> RawOutcome {
    RawOutcome::new(name, "com.example.CalculatorTest", OutcomeKind::Failure)
        .with_timing(2_000, 2_015)
        .with_groups(&["regression"])
        .with_error(message, trace)
}

pub fn skipped(name: &str) -> RawOutcome {
    RawOutcome::new(name, "com.example.LoginTest", OutcomeKind::Skip).with_timing(3_000, 3_000)
}

pub fn collect(events: &[RawOutcome]) -> Vec<TestRecord> {
    let collector = Collector::new();
    for event in events {
        collector.append(event);
    }
    collector.finish()
}

/// Three passes (10ms, 20ms, 5000ms), one failure without trace, one skip.
pub fn mixed_run() -> Vec<TestRecord> {
    collect(&[
        passed("testAddition", 10),
        passed("testSubtraction", 20),
        failed("testMultiplication", Some("expected 8 but was 7"), &[]),
        passed("testSlowDivision", 5_000),
        skipped("testLogin"),
    ])
}
