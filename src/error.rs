//! Error types for report generation.
//!
//! Normalization anomalies never surface here; the collector recovers from
//! them locally. Only I/O and serialization failures reach the caller.

use std::error::Error as _;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The report directory could not be created
    #[error("failed to create report directory `{}`", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An artifact could not be written
    #[error("failed to write report file `{}`", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stale artifact from an earlier run could not be removed
    #[error("failed to remove stale report file `{}`", .path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The machine-readable summary could not be serialized
    #[error("failed to serialize run summary")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    /// The events file could not be read
    #[error("failed to read outcome events from `{}`", .path.display())]
    ReadEvents {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    /// The error followed by each underlying cause, `: `-separated.
    pub fn display_chain(&self) -> String {
        let mut out = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            out.push_str(": ");
            out.push_str(&cause.to_string());
            source = cause.source();
        }
        out
    }
}
