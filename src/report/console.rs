use crate::collector::record::{TestRecord, TestStatus};
use crate::report::summary::RunSummary;

// ============================================================================
// Console reporter — formatted terminal output
// ============================================================================

/// Format a run for terminal output.
///
/// Produces output like:
/// ```text
/// ✓ PASS  testAddition (CalculatorTest) 0.01s
/// ✗ FAIL  testDivision (CalculatorTest) 0.02s
///     expected 8 but was 7
/// - SKIP  testLogin (LoginTest) 0.00s
///
/// === Results: 1 passed, 1 failed, 1 skipped (3 total, 50.0% pass rate) ===
/// ```
pub fn format_console_report(records: &[TestRecord]) -> String {
    let summary = RunSummary::from_records(records);
    let mut out = String::new();

    for record in records {
        let marker = match record.status() {
            TestStatus::Pass => "\u{2713} PASS",
            TestStatus::Fail => "\u{2717} FAIL",
            TestStatus::Skip => "- SKIP",
        };

        out.push_str(&format!(
            "{}  {} ({}) {}\n",
            marker,
            record.name(),
            record.suite_or_class(),
            record.formatted_duration()
        ));

        if let Some(message) = record.failure().and_then(|f| f.message.as_deref()) {
            out.push_str(&format!("    {}\n", message));
        }
    }

    out.push_str(&format!(
        "\n=== Results: {} passed, {} failed, {} skipped ({} total, {} pass rate) ===\n",
        summary.passed,
        summary.failed,
        summary.skipped,
        summary.total,
        summary.formatted_pass_rate()
    ));

    out
}
