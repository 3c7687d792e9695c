use serde::{Deserialize, Serialize};

use crate::collector::record::{TestRecord, TestStatus};
use crate::error::ReportError;

// ============================================================================
// Run summary — counts derived from the record sequence
// ============================================================================

/// Aggregate figures for one run. Always recomputed from records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl RunSummary {
    pub fn from_records(records: &[TestRecord]) -> Self {
        let mut summary = RunSummary {
            total: records.len(),
            ..Default::default()
        };
        for record in records {
            match record.status() {
                TestStatus::Pass => summary.passed += 1,
                TestStatus::Fail => summary.failed += 1,
                TestStatus::Skip => summary.skipped += 1,
            }
        }
        summary
    }

    /// Tests that actually ran (everything but skips).
    pub fn executed(&self) -> usize {
        self.total - self.skipped
    }

    /// Percentage of executed tests that passed, `0.0` if nothing ran.
    pub fn pass_rate(&self) -> f64 {
        let executed = self.executed();
        if executed == 0 {
            return 0.0;
        }
        self.passed as f64 / executed as f64 * 100.0
    }

    /// Pass rate with one decimal and a `%` suffix, e.g. `75.0%`.
    pub fn formatted_pass_rate(&self) -> String {
        format!("{:.1}%", self.pass_rate())
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

// ============================================================================
// Summary document — machine-stable sibling of the HTML report
// ============================================================================

/// Serialized next to the HTML report as `summary.json`.
///
/// Carries no generation timestamp, so rendering the same records twice
/// yields identical bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryDocument {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub executed: usize,

    /// Rounded to one decimal place
    pub pass_rate: f64,

    /// SHA-1 of the canonical JSON encoding of the record sequence
    pub records_sha1: String,
}

impl SummaryDocument {
    pub fn build(records: &[TestRecord]) -> Result<Self, ReportError> {
        let summary = RunSummary::from_records(records);
        Ok(Self {
            total: summary.total,
            passed: summary.passed,
            failed: summary.failed,
            skipped: summary.skipped,
            executed: summary.executed(),
            pass_rate: (summary.pass_rate() * 10.0).round() / 10.0,
            records_sha1: records_fingerprint(records)?,
        })
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        serde_json::to_string_pretty(self).map_err(|source| ReportError::Serialize { source })
    }
}

/// Hex SHA-1 over the JSON encoding of `records`.
pub fn records_fingerprint(records: &[TestRecord]) -> Result<String, ReportError> {
    use sha1::{Digest, Sha1};

    let encoded = serde_json::to_vec(records).map_err(|source| ReportError::Serialize { source })?;
    let mut hasher = Sha1::new();
    hasher.update(&encoded);
    Ok(format!("{:x}", hasher.finalize()))
}
