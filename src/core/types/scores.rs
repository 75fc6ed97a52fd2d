use indexmap::IndexSet;
use serde::Serialize;
use serde_json::Value;

/// Score for one test or subtest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u8,
}

impl ScoreEntry {
    pub fn new(name: impl Into<String>, score: u8) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Flattened scores for a whole run.
///
/// Only `run_info` and `test_scores` are serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringOutput {
    pub run_info: Value,
    /// Every test and synthesized subtest name, in first-seen order
    #[serde(skip)]
    pub test_names: IndexSet<String>,
    pub test_scores: Vec<ScoreEntry>,
}
