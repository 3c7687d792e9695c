use serde::{Deserialize, Serialize};

// ============================================================================
// Test record — one normalized entry per executed test case
// ============================================================================

/// Final status of a single test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestStatus {
    Pass,
    Fail,
    Skip,
}

impl TestStatus {
    /// Upper-case label shown in the results table.
    pub fn label(self) -> &'static str {
        match self {
            TestStatus::Pass => "PASS",
            TestStatus::Fail => "FAIL",
            TestStatus::Skip => "SKIP",
        }
    }

    /// Lower-case form, used as the CSS class of the status badge.
    pub fn css_class(self) -> &'static str {
        match self {
            TestStatus::Pass => "pass",
            TestStatus::Fail => "fail",
            TestStatus::Skip => "skip",
        }
    }
}

/// Failure details carried by a FAIL record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureDetail {
    /// Human-readable failure message, absent if the error carried none
    pub message: Option<String>,

    /// Stack frames, outermost call last
    pub trace: Vec<String>,
}

impl FailureDetail {
    /// Whether there is anything worth showing in a detail block.
    pub fn has_details(&self) -> bool {
        self.message.is_some() || !self.trace.is_empty()
    }
}

/// The normalized, immutable record of one executed test case.
///
/// Built by [`Collector`](crate::collector::collector::Collector) from an
/// upstream outcome event. Fields are private so a collected record cannot
/// be mutated afterwards. Serialize-only: records are built through
/// [`TestRecord::new`] so a failure can never sit on a PASS or SKIP record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestRecord {
    name: String,
    suite_or_class: String,
    status: TestStatus,
    started_at: i64,
    ended_at: i64,
    groups: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    failure: Option<FailureDetail>,
}

impl TestRecord {
    /// Build a record with no groups, description or failure.
    pub fn new(
        name: impl Into<String>,
        suite_or_class: impl Into<String>,
        status: TestStatus,
        started_at: i64,
        ended_at: i64,
    ) -> Self {
        Self {
            name: name.into(),
            suite_or_class: suite_or_class.into(),
            status,
            started_at,
            ended_at,
            groups: Vec::new(),
            description: None,
            failure: None,
        }
    }

    pub fn with_groups(mut self, groups: Vec<String>) -> Self {
        self.groups = groups;
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Attach failure details. Dropped unless `status` is FAIL.
    pub fn with_failure(mut self, failure: FailureDetail) -> Self {
        if self.status == TestStatus::Fail {
            self.failure = Some(failure);
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn suite_or_class(&self) -> &str {
        &self.suite_or_class
    }

    pub fn status(&self) -> TestStatus {
        self.status
    }

    /// Start timestamp in epoch milliseconds.
    pub fn started_at(&self) -> i64 {
        self.started_at
    }

    /// End timestamp in epoch milliseconds.
    pub fn ended_at(&self) -> i64 {
        self.ended_at
    }

    /// Elapsed time in milliseconds. Never negative: an end timestamp
    /// earlier than the start counts as zero.
    pub fn duration_ms(&self) -> u64 {
        u64::try_from(self.ended_at.saturating_sub(self.started_at)).unwrap_or(0)
    }

    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn failure(&self) -> Option<&FailureDetail> {
        self.failure.as_ref()
    }

    /// Duration in seconds with two decimals, e.g. `5.00s`.
    pub fn formatted_duration(&self) -> String {
        format!("{:.2}s", self.duration_ms() as f64 / 1000.0)
    }

    /// Group tags joined with `", "`, empty when there are none.
    pub fn groups_joined(&self) -> String {
        self.groups.join(", ")
    }
}
