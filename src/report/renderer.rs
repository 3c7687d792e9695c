use std::io::Write;
use std::path::{Path, PathBuf};

use atomicwrites::{AllowOverwrite, AtomicFile};
use chrono::{Local, NaiveDateTime};
use tracing::{debug, info};

use crate::collector::record::TestRecord;
use crate::error::ReportError;
use crate::report::html::generate_html_report;
use crate::report::summary::SummaryDocument;

// ============================================================================
// Report renderer — writes the report artifacts for one run
// ============================================================================

pub const DEFAULT_TITLE: &str = "Test Execution Report";
pub const DEFAULT_DIR_NAME: &str = "custom-reports";
pub const DEFAULT_FILE_NAME: &str = "index.html";
pub const SUMMARY_FILE_NAME: &str = "summary.json";

/// Files produced by a successful render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportArtifact {
    /// The HTML report
    pub html: PathBuf,

    /// The machine-readable summary, if enabled
    pub summary: Option<PathBuf>,
}

/// Renders record sequences into report files.
///
/// Holds configuration only; each call to [`render`](Self::render) is
/// independent of every other.
#[derive(Debug, Clone)]
pub struct ReportRenderer {
    title: String,
    write_summary: bool,
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            write_summary: true,
        }
    }
}

impl ReportRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Toggle `summary.json` next to the HTML report.
    pub fn with_summary(mut self, write_summary: bool) -> Self {
        self.write_summary = write_summary;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Render `records` to `destination`, stamped with the current local time.
    pub fn render(
        &self,
        records: &[TestRecord],
        destination: &Path,
    ) -> Result<ReportArtifact, ReportError> {
        self.render_at(records, destination, Local::now().naive_local())
    }

    /// Render with an explicit generation timestamp.
    ///
    /// The parent directory of `destination` is created if missing. Both
    /// payloads are built before anything touches disk, and each file is
    /// written to a temporary sibling and renamed into place, so a crash
    /// never leaves a truncated report behind. The HTML report is written
    /// last; a stale `summary.json` is removed when summaries are off.
    pub fn render_at(
        &self,
        records: &[TestRecord],
        destination: &Path,
        generated_at: NaiveDateTime,
    ) -> Result<ReportArtifact, ReportError> {
        let html = generate_html_report(records, &self.title, generated_at);
        let summary_json = if self.write_summary {
            Some(SummaryDocument::build(records)?.to_json()?)
        } else {
            None
        };

        if let Some(dir) = destination.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|source| ReportError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let summary_path = destination.with_file_name(SUMMARY_FILE_NAME);
        let summary = match summary_json {
            Some(json) => {
                write_atomic(&summary_path, json.as_bytes())?;
                debug!(path = %summary_path.display(), "wrote run summary");
                Some(summary_path)
            }
            None => {
                remove_stale(&summary_path)?;
                None
            }
        };

        write_atomic(destination, html.as_bytes())?;
        debug!(path = %destination.display(), bytes = html.len(), "wrote HTML report");

        info!(
            path = %destination.display(),
            records = records.len(),
            "report generated"
        );

        Ok(ReportArtifact {
            html: destination.to_path_buf(),
            summary,
        })
    }
}

/// Location of the report file under a caller-supplied output directory.
pub fn report_path(output_dir: &Path, dir_name: &str, file_name: &str) -> PathBuf {
    output_dir.join(dir_name).join(file_name)
}

fn remove_stale(path: &Path) -> Result<(), ReportError> {
    match std::fs::remove_file(path) {
        Ok(()) => {
            debug!(path = %path.display(), "removed stale run summary");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(ReportError::Remove {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), ReportError> {
    AtomicFile::new(path, AllowOverwrite)
        .write(|file| file.write_all(contents))
        .map_err(|error| ReportError::Write {
            path: path.to_path_buf(),
            source: match error {
                atomicwrites::Error::Internal(e) | atomicwrites::Error::User(e) => e,
            },
        })
}
