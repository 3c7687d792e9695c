use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::cli::config::{ReportConfig, build_renderer};
use crate::collector::collector::Collector;
use crate::collector::outcome::RawOutcome;
use crate::error::ReportError;
use crate::generate_report;
use crate::report::console::format_console_report;
use crate::report::summary::RunSummary;

// ============================================================================
// render subcommand
// ============================================================================

/// Collect the events at `events_path`, render the report, and return
/// whether every test passed.
///
/// A report that cannot be written is logged but does not change the
/// returned verdict.
pub fn cmd_render(
    events_path: &str,
    output_dir: &str,
    title: Option<&str>,
    console: bool,
    config: &ReportConfig,
) -> Result<bool, ReportError> {
    let collector = Collector::new();
    let appended = load_events(Path::new(events_path), &collector)?;
    info!(events = appended, path = events_path, "collected outcome events");

    let records = collector.finish();
    let summary = RunSummary::from_records(&records);

    if console {
        print!("{}", format_console_report(&records));
    }

    let renderer = build_renderer(config, title);
    generate_report(
        &renderer,
        &records,
        Path::new(output_dir),
        &config.dir_name,
        &config.file_name,
    );

    Ok(summary.all_passed())
}

/// Feed every event line of `path` into `collector`, returning how many
/// were appended.
///
/// Blank lines are ignored. Lines that are not a valid event, including
/// lines that are not UTF-8, are logged and skipped so one bad line cannot
/// drop the rest of the run.
pub fn load_events(path: &Path, collector: &Collector) -> Result<usize, ReportError> {
    let read_error = |source| ReportError::ReadEvents {
        path: PathBuf::from(path),
        source,
    };

    let file = std::fs::File::open(path).map_err(read_error)?;
    let mut appended = 0;

    for (index, line) in BufReader::new(file).split(b'\n').enumerate() {
        let line = line.map_err(read_error)?;
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        // Decoded per line: invalid UTF-8 is just another malformed event.
        match serde_json::from_slice::<RawOutcome>(&line) {
            Ok(event) => {
                collector.append(&event);
                appended += 1;
            }
            Err(e) => warn!(line = index + 1, error = %e, "skipping malformed outcome event"),
        }
    }

    Ok(appended)
}
