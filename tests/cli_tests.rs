use clap::Parser;
use run_report::cli::commands::{cmd_render, load_events};
use run_report::cli::config::{AppConfig, Cli, Commands, ReportConfig, build_renderer, load_config};
use run_report::collector::collector::Collector;
use run_report::collector::record::TestStatus;

// ============================================================================
// CLI Argument Parsing Tests
// ============================================================================

#[test]
fn cli_parse_render_minimal() {
    let cli = Cli::parse_from(["run-report", "render", "--events", "events.jsonl"]);
    assert_eq!(cli.verbose, 0);
    match cli.command {
        Commands::Render {
            events,
            output_dir,
            title,
            console,
        } => {
            assert_eq!(events, "events.jsonl");
            assert_eq!(output_dir, "target");
            assert!(title.is_none());
            assert!(!console);
        }
    }
}

#[test]
fn cli_parse_render_all_args() {
    let cli = Cli::parse_from([
        "run-report",
        "-vv",
        "--config",
        "custom.yaml",
        "render",
        "--events",
        "run.jsonl",
        "-o",
        "build",
        "--title",
        "Nightly",
        "--console",
    ]);
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.config.as_deref(), Some("custom.yaml"));
    let Commands::Render {
        events,
        output_dir,
        title,
        console,
    } = cli.command;
    assert_eq!(events, "run.jsonl");
    assert_eq!(output_dir, "build");
    assert_eq!(title.as_deref(), Some("Nightly"));
    assert!(console);
}

#[test]
fn cli_requires_events() {
    assert!(Cli::try_parse_from(["run-report", "render"]).is_err());
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn config_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.report.title, "Test Execution Report");
    assert_eq!(config.report.dir_name, "custom-reports");
    assert_eq!(config.report.file_name, "index.html");
    assert!(config.report.write_summary);
}

#[test]
fn config_missing_file_uses_defaults() {
    let config = load_config(Some("/nonexistent/run-report.yaml"));
    assert_eq!(config.report.dir_name, "custom-reports");
}

#[test]
fn config_partial_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run-report.yaml");
    std::fs::write(&path, "report:\n  title: Regression\n  write_summary: false\n").unwrap();

    let config = load_config(path.to_str());
    assert_eq!(config.report.title, "Regression");
    assert!(!config.report.write_summary);
    assert_eq!(config.report.file_name, "index.html");
}

#[test]
fn config_malformed_yaml_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run-report.yaml");
    std::fs::write(&path, "report: [unclosed").unwrap();

    let config = load_config(path.to_str());
    assert_eq!(config.report.title, "Test Execution Report");
}

#[test]
fn build_renderer_cli_title_wins() {
    let config = ReportConfig {
        title: "From Config".into(),
        ..ReportConfig::default()
    };
    assert_eq!(build_renderer(&config, None).title(), "From Config");
    assert_eq!(build_renderer(&config, Some("From CLI")).title(), "From CLI");
}

// ============================================================================
// Event Loading Tests
// ============================================================================

const EVENTS: &str = r#"{"name":"testAdd","class_name":"CalculatorTest","start_millis":0,"end_millis":10,"groups":["smoke"],"outcome":"success"}

not json at all
{"name":"testDivide","class_name":"CalculatorTest","start_millis":10,"end_millis":25,"outcome":"failure","error":{"message":"expected 8 but was 7"}}
{"name":"testLogin","class":"LoginTest","outcome":"skip"}
{"name":"testUnknown","outcome":"exploded"}
"#;

#[test]
fn load_events_skips_malformed_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.jsonl");
    std::fs::write(&path, EVENTS).unwrap();

    let collector = Collector::new();
    let appended = load_events(&path, &collector).unwrap();
    assert_eq!(appended, 3);

    let records = collector.finish();
    let names: Vec<&str> = records.iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["testAdd", "testDivide", "testLogin"]);
    assert_eq!(records[1].status(), TestStatus::Fail);
    assert_eq!(records[2].suite_or_class(), "LoginTest");
}

#[test]
fn load_events_skips_non_utf8_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.jsonl");
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"{\"name\":\"testFirst\",\"class_name\":\"C\",\"outcome\":\"success\"}\n");
    bytes.extend_from_slice(b"\xff\xfe bad\n");
    bytes.extend_from_slice(b"{\"name\":\"testSecond\",\"class_name\":\"C\",\"outcome\":\"skip\"}\r\n");
    std::fs::write(&path, bytes).unwrap();

    let collector = Collector::new();
    let appended = load_events(&path, &collector).unwrap();
    assert_eq!(appended, 2);

    let records = collector.finish();
    let names: Vec<&str> = records.iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["testFirst", "testSecond"]);
}

#[test]
fn load_events_missing_file_errors() {
    let collector = Collector::new();
    assert!(load_events(std::path::Path::new("/nonexistent/events.jsonl"), &collector).is_err());
}

#[test]
fn cmd_render_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let events = dir.path().join("events.jsonl");
    std::fs::write(&events, EVENTS).unwrap();
    let output_dir = dir.path().join("target");

    let all_passed = cmd_render(
        events.to_str().unwrap(),
        output_dir.to_str().unwrap(),
        Some("CLI Run"),
        false,
        &ReportConfig::default(),
    )
    .unwrap();

    assert!(!all_passed);
    let html =
        std::fs::read_to_string(output_dir.join("custom-reports").join("index.html")).unwrap();
    assert!(html.contains("<h1>CLI Run</h1>"));
    assert!(html.contains("expected 8 but was 7"));
    assert!(output_dir.join("custom-reports").join("summary.json").is_file());
}

#[test]
fn cmd_render_verdict_survives_report_failure() {
    let dir = tempfile::tempdir().unwrap();
    let events = dir.path().join("events.jsonl");
    std::fs::write(
        &events,
        "{\"name\":\"testAdd\",\"class_name\":\"C\",\"outcome\":\"success\"}\n",
    )
    .unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();

    let all_passed = cmd_render(
        events.to_str().unwrap(),
        blocker.to_str().unwrap(),
        None,
        false,
        &ReportConfig::default(),
    )
    .unwrap();
    assert!(all_passed);
}
