use serde::{Deserialize, Serialize};

// ============================================================================
// Outcome events — the shape the test-execution engine reports
// ============================================================================

/// Three-way result reported by the execution engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    #[serde(alias = "pass", alias = "passed")]
    Success,
    #[serde(alias = "fail", alias = "failed")]
    Failure,
    #[serde(alias = "skipped")]
    Skip,
}

/// Anything the execution engine hands over when a test case finishes.
///
/// Every accessor is best-effort: an engine that cannot provide a field
/// returns `None` or an empty slice and the collector fills in a default.
pub trait TestOutcome {
    fn name(&self) -> Option<&str>;
    fn owner(&self) -> Option<&str>;
    fn start_millis(&self) -> Option<i64>;
    fn end_millis(&self) -> Option<i64>;
    fn groups(&self) -> &[String];
    fn description(&self) -> Option<&str>;
    fn outcome(&self) -> OutcomeKind;

    /// Whether the engine attached an error object to this outcome.
    fn has_error(&self) -> bool;
    fn error_message(&self) -> Option<&str>;
    fn stack_frames(&self) -> &[String];
}

/// Error object attached to a failed outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawError {
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub stack_trace: Vec<String>,
}

/// Stock outcome event, deserialized from one line of an events file.
///
/// ```json
/// {"name":"testAdd","class_name":"CalculatorTest","start_millis":0,
///  "end_millis":12,"groups":["smoke"],"outcome":"failure",
///  "error":{"message":"expected 8 but was 7","stack_trace":[]}}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawOutcome {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, alias = "class")]
    pub class_name: Option<String>,

    #[serde(default)]
    pub start_millis: Option<i64>,

    #[serde(default)]
    pub end_millis: Option<i64>,

    #[serde(default)]
    pub groups: Vec<String>,

    #[serde(default)]
    pub description: Option<String>,

    pub outcome: OutcomeKind,

    #[serde(default)]
    pub error: Option<RawError>,
}

impl RawOutcome {
    pub fn new(name: &str, class_name: &str, outcome: OutcomeKind) -> Self {
        Self {
            name: Some(name.to_string()),
            class_name: Some(class_name.to_string()),
            start_millis: None,
            end_millis: None,
            groups: Vec::new(),
            description: None,
            outcome,
            error: None,
        }
    }

    pub fn with_timing(mut self, start_millis: i64, end_millis: i64) -> Self {
        self.start_millis = Some(start_millis);
        self.end_millis = Some(end_millis);
        self
    }

    pub fn with_groups(mut self, groups: &[&str]) -> Self {
        self.groups = groups.iter().map(|g| g.to_string()).collect();
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_error(mut self, message: Option<&str>, stack_trace: &[&str]) -> Self {
        self.error = Some(RawError {
            message: message.map(str::to_string),
            stack_trace: stack_trace.iter().map(|f| f.to_string()).collect(),
        });
        self
    }
}

impl TestOutcome for RawOutcome {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn owner(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    fn start_millis(&self) -> Option<i64> {
        self.start_millis
    }

    fn end_millis(&self) -> Option<i64> {
        self.end_millis
    }

    fn groups(&self) -> &[String] {
        &self.groups
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn outcome(&self) -> OutcomeKind {
        self.outcome
    }

    fn has_error(&self) -> bool {
        self.error.is_some()
    }

    fn error_message(&self) -> Option<&str> {
        self.error.as_ref().and_then(|e| e.message.as_deref())
    }

    fn stack_frames(&self) -> &[String] {
        self.error
            .as_ref()
            .map(|e| e.stack_trace.as_slice())
            .unwrap_or_default()
    }
}
