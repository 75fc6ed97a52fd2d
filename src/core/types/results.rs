use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;
use strum::{EnumIter, EnumString, IntoStaticStr};

/// Outcome reported by the harness for a test or subtest.
///
/// Known WPT statuses parse into their own variants; anything else is kept
/// verbatim in `Other`. Parsing is case-sensitive, so `"pass"` is not a pass.
#[derive(
    Debug, Clone, PartialEq, Eq, Deserialize, EnumString, EnumIter, IntoStaticStr,
)]
#[serde(from = "String")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Pass,
    Fail,
    Ok,
    Timeout,
    Error,
    Crash,
    Skip,
    Notrun,
    PreconditionFailed,
    Assert,
    #[strum(default)]
    Other(String),
}

impl Status {
    pub fn is_pass(&self) -> bool {
        *self == Status::Pass
    }

    /// Binary score: 1 for `PASS`, 0 for every other status
    pub fn score(&self) -> u8 {
        u8::from(self.is_pass())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Status::Other(raw) => raw,
            known => <&'static str>::from(known),
        }
    }
}

impl From<String> for Status {
    fn from(raw: String) -> Self {
        Status::from_str(&raw).unwrap_or(Status::Other(raw))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubtestResult {
    pub name: String,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TestResult {
    /// Test identifier, usually the URL path of the test file
    pub test: String,
    pub status: Status,
    pub subtests: Vec<SubtestResult>,
}

/// Raw output of a WPT run
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RunResults {
    /// Environment metadata (browser, platform, ...), never inspected
    pub run_info: Value,
    pub results: Vec<TestResult>,
}

impl RunResults {
    pub fn summary(&self) -> ScoreSummary {
        let mut summary = ScoreSummary::default();
        for test in &self.results {
            summary.tests += 1;
            if test.status.is_pass() {
                summary.passed_tests += 1;
            }
            for subtest in &test.subtests {
                summary.subtests += 1;
                if subtest.status.is_pass() {
                    summary.passed_subtests += 1;
                }
            }
        }
        summary
    }
}

/// Pass counts for a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreSummary {
    pub tests: usize,
    pub passed_tests: usize,
    pub subtests: usize,
    pub passed_subtests: usize,
}

impl ScoreSummary {
    pub fn entries(&self) -> usize {
        self.tests + self.subtests
    }

    pub fn passed(&self) -> usize {
        self.passed_tests + self.passed_subtests
    }

    pub fn percent_passed(&self) -> f64 {
        if self.entries() > 0 {
            (self.passed() as f64 / self.entries() as f64) * 100.0
        } else {
            0.0
        }
    }
}
