use std::path::Path;

use crate::{
    collector::record::TestRecord,
    report::renderer::{ReportArtifact, ReportRenderer, report_path},
};

pub mod cli;
pub mod collector;
pub mod error;
pub mod logging;
pub mod report;

/// Render the report for a finished run under `output_dir/dir_name/file_name`.
///
/// Report generation runs after test execution and must never abort it:
/// failures are logged and announced on stderr, and `None` is returned.
/// On success the report location is announced on stdout.
pub fn generate_report(
    renderer: &ReportRenderer,
    records: &[TestRecord],
    output_dir: &Path,
    dir_name: &str,
    file_name: &str,
) -> Option<ReportArtifact> {
    let destination = report_path(output_dir, dir_name, file_name);

    match renderer.render(records, &destination) {
        Ok(artifact) => {
            println!("Report generated at: {}", artifact.html.display());
            Some(artifact)
        }
        Err(e) => {
            let chain = e.display_chain();
            tracing::error!(error = %chain, "report generation failed");
            eprintln!("Error generating report: {}", chain);
            None
        }
    }
}
