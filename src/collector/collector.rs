use std::sync::{Mutex, PoisonError};

use tracing::{debug, warn};

use crate::collector::outcome::{OutcomeKind, TestOutcome};
use crate::collector::record::{FailureDetail, TestRecord, TestStatus};

// ============================================================================
// Outcome collector — accumulates records for one run
// ============================================================================

/// Accumulates one [`TestRecord`] per completed test case, in arrival order.
///
/// `append` takes `&self` and serializes callers through a mutex, so the
/// collector can be shared between worker threads that finish tests
/// concurrently. Consuming the collector with [`Collector::finish`] is the
/// barrier between collection and rendering.
#[derive(Debug, Default)]
pub struct Collector {
    records: Mutex<Vec<TestRecord>>,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize `event` and append it. Never fails: missing fields are
    /// replaced by empty or absent values.
    pub fn append(&self, event: &dyn TestOutcome) {
        let record = normalize(event);
        debug!(
            test = record.name(),
            class = record.suite_or_class(),
            status = record.status().label(),
            "collected test outcome"
        );

        // A panic in another appender cannot leave the Vec half-pushed.
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        records.push(record);
    }

    /// Number of records collected so far.
    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Hand off the complete record sequence.
    pub fn finish(self) -> Vec<TestRecord> {
        self.records
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Map an upstream outcome onto a [`TestRecord`].
pub fn normalize(event: &dyn TestOutcome) -> TestRecord {
    let name = event.name().unwrap_or_default();
    let owner = event.owner().unwrap_or_default();

    if name.is_empty() {
        warn!(class = owner, "outcome event without a test name");
    }

    let status = match event.outcome() {
        OutcomeKind::Success => TestStatus::Pass,
        OutcomeKind::Failure => TestStatus::Fail,
        OutcomeKind::Skip => TestStatus::Skip,
    };

    let start = event.start_millis().unwrap_or(0);
    let end = event.end_millis().unwrap_or(start);
    if end < start {
        warn!(test = name, start, end, "outcome ends before it starts, duration clamped to zero");
    }

    let description = event
        .description()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string);

    let mut record = TestRecord::new(name, owner, status, start, end)
        .with_groups(normalize_groups(event.groups()))
        .with_description(description);

    if status == TestStatus::Fail && event.has_error() {
        record = record.with_failure(FailureDetail {
            message: event
                .error_message()
                .filter(|m| !m.is_empty())
                .map(str::to_string),
            trace: event.stack_frames().to_vec(),
        });
    }

    record
}

/// Drop blank tags and repeats, keeping declaration order.
fn normalize_groups(groups: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(groups.len());
    for group in groups {
        let group = group.trim();
        if group.is_empty() || out.iter().any(|g| g == group) {
            continue;
        }
        out.push(group.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::outcome::RawOutcome;

    #[test]
    fn groups_deduplicated_in_order() {
        let groups: Vec<String> = ["smoke", "regression", "smoke", " ", "login"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(normalize_groups(&groups), vec!["smoke", "regression", "login"]);
    }

    #[test]
    fn missing_end_means_zero_duration() {
        let mut event = RawOutcome::new("t", "C", OutcomeKind::Success);
        event.start_millis = Some(1_000);
        let record = normalize(&event);
        assert_eq!(record.duration_ms(), 0);
    }
}
