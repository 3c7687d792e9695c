use chrono::NaiveDateTime;

use crate::collector::record::{FailureDetail, TestRecord, TestStatus};
use crate::report::summary::RunSummary;

// ============================================================================
// HTML reporter — self-contained HTML report
// ============================================================================

/// Embedded stylesheet. Static so identical input renders identical bytes.
const STYLESHEET: &str = include_str!("report.css");

/// Format of the generation timestamp in the report header.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Generate a self-contained HTML report.
///
/// Layout:
/// - Header with `title` and the generation timestamp
/// - Summary cards: total, passed, failed, skipped, pass rate
/// - Results table in record order, one row per record
/// - A detail row under each FAIL record that has a message or a trace
///
/// Only the timestamp depends on anything other than `records` and `title`.
pub fn generate_html_report(
    records: &[TestRecord],
    title: &str,
    generated_at: NaiveDateTime,
) -> String {
    let summary = RunSummary::from_records(records);

    let mut rows = String::new();
    for record in records {
        rows.push_str(&result_row(record));
        if record.status() != TestStatus::Fail {
            continue;
        }
        if let Some(failure) = record.failure().filter(|f| f.has_details()) {
            rows.push_str(&failure_row(failure));
        }
    }

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>
{style}</style>
</head>
<body>
<div class="container">
<div class="header">
<h1>{title}</h1>
<p class="subtitle">Generated on {generated_at}</p>
</div>
{summary}<div class="content">
<h2>Test Results</h2>
<table class="test-table">
<thead>
<tr><th>Test Name</th><th>Class</th><th>Status</th><th>Duration</th><th>Groups</th></tr>
</thead>
<tbody>
{rows}</tbody>
</table>
</div>
<div class="footer">
<p>Generated by run-report</p>
</div>
</div>
</body>
</html>
"##,
        title = escape_html(title),
        style = STYLESHEET,
        generated_at = generated_at.format(TIMESTAMP_FORMAT),
        summary = summary_block(&summary),
        rows = rows,
    )
}

/// The five summary cards, in fixed order.
fn summary_block(summary: &RunSummary) -> String {
    let cards = [
        ("total", summary.total.to_string(), "Total Tests"),
        ("passed", summary.passed.to_string(), "Passed"),
        ("failed", summary.failed.to_string(), "Failed"),
        ("skipped", summary.skipped.to_string(), "Skipped"),
        ("rate", summary.formatted_pass_rate(), "Pass Rate"),
    ];

    let mut out = String::from("<div class=\"summary\">\n");
    for (class, figure, label) in cards {
        out.push_str(&format!(
            "<div class=\"summary-card {class}\"><h3>{figure}</h3><p>{label}</p></div>\n"
        ));
    }
    out.push_str("</div>\n");
    out
}

fn result_row(record: &TestRecord) -> String {
    let status = record.status();
    let name_title = record
        .description()
        .map(|d| format!(" title=\"{}\"", escape_html(d)))
        .unwrap_or_default();

    format!(
        r#"<tr class="result {class}">
<td class="name"{name_title}>{name}</td>
<td class="class">{owner}</td>
<td><span class="status {class}">{label}</span></td>
<td class="duration">{duration}</td>
<td class="groups">{groups}</td>
</tr>
"#,
        class = status.css_class(),
        name_title = name_title,
        name = escape_html(record.name()),
        owner = escape_html(record.suite_or_class()),
        label = status.label(),
        duration = record.formatted_duration(),
        groups = escape_html(&record.groups_joined()),
    )
}

fn failure_row(failure: &FailureDetail) -> String {
    let mut out = String::from(
        "<tr class=\"failure-details\">\n<td colspan=\"5\">\n<div class=\"error-details\">\n",
    );

    if let Some(ref message) = failure.message {
        out.push_str(&format!(
            "<div class=\"error-message\">{}</div>\n",
            escape_html(message)
        ));
    }

    if !failure.trace.is_empty() {
        out.push_str(&format!(
            "<pre class=\"stack-trace\">{}</pre>\n",
            escape_html(&failure.trace.join("\n"))
        ));
    }

    out.push_str("</div>\n</td>\n</tr>\n");
    out
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
