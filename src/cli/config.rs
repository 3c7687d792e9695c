use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::report::renderer::{DEFAULT_DIR_NAME, DEFAULT_FILE_NAME, DEFAULT_TITLE, ReportRenderer};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "run-report",
    version,
    about = "Aggregate test outcomes into a self-contained HTML report"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: run-report.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a report from a file of outcome events (one JSON object per line)
    Render {
        /// Path to the outcome events file
        #[arg(long)]
        events: String,

        /// Directory the report subdirectory is created in
        #[arg(short, long, default_value = "target")]
        output_dir: String,

        /// Report title (default: from config, then "Test Execution Report")
        #[arg(long)]
        title: Option<String>,

        /// Also print a per-test summary to stdout
        #[arg(long)]
        console: bool,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `run-report.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_title")]
    pub title: String,

    /// Subdirectory of the output directory holding the report
    #[serde(default = "default_dir_name")]
    pub dir_name: String,

    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Write summary.json next to the HTML report
    #[serde(default = "default_true")]
    pub write_summary: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            dir_name: default_dir_name(),
            file_name: default_file_name(),
            write_summary: true,
        }
    }
}

// Serde default helpers
fn default_title() -> String { DEFAULT_TITLE.to_string() }
fn default_dir_name() -> String { DEFAULT_DIR_NAME.to_string() }
fn default_file_name() -> String { DEFAULT_FILE_NAME.to_string() }
fn default_true() -> bool { true }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("run-report.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(path = config_path, error = %e, "malformed config file, using defaults");
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Config Builders (merge CLI args with config file)
// ============================================================================

/// Build a ReportRenderer from resolved CLI/config values.
pub fn build_renderer(config: &ReportConfig, title: Option<&str>) -> ReportRenderer {
    ReportRenderer::new()
        .with_title(title.unwrap_or(&config.title))
        .with_summary(config.write_summary)
}
