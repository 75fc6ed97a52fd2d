use std::borrow::Cow;

use indexmap::IndexSet;
use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;

use crate::types::{AppError, AppResult, RunResults, ScoreEntry, ScoringOutput};

/// Joins a test name and one of its subtest names
pub const SUBTEST_SEPARATOR: &str = "::";

/// Decode the raw results payload.
///
/// Malformed JSON is a [`AppError::Parse`]; JSON that lacks an expected field
/// or has one of the wrong type is a [`AppError::Structure`]. Unpaired
/// surrogate escapes are decoded as U+FFFD and nesting depth is not limited.
pub fn parse_raw_results(input: &str) -> AppResult<RunResults> {
    let input = replace_lone_surrogates(input);
    let mut deserializer = serde_json::Deserializer::from_str(&input);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(&mut deserializer).map_err(AppError::Parse)?;
    deserializer.end().map_err(AppError::Parse)?;
    serde_json::from_value(value).map_err(AppError::Structure)
}

/// Rewrite each `\uXXXX` escape of an unpaired UTF-16 surrogate to `\ufffd`.
///
/// Harnesses that dump Python strings emit these for test names built from
/// arbitrary UTF-16 input, and Rust strings cannot hold them.
pub fn replace_lone_surrogates(input: &str) -> Cow<'_, str> {
    let bytes = input.as_bytes();
    let mut out = String::new();
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'\\' {
            i += 1;
            continue;
        }
        match surrogate_at(bytes, i) {
            Some(0xD800..=0xDBFF)
                if matches!(surrogate_at(bytes, i + 6), Some(0xDC00..=0xDFFF)) =>
            {
                i += 12;
            }
            Some(unit) => {
                debug!("Replacing unpaired surrogate \\u{unit:04x} at byte {i}");
                out.push_str(&input[copied..i]);
                out.push_str("\\ufffd");
                i += 6;
                copied = i;
            }
            // Any other escape, including `\\`, is two bytes before its payload
            None => i += 2,
        }
    }

    if copied == 0 {
        return Cow::Borrowed(input);
    }
    out.push_str(&input[copied..]);
    Cow::Owned(out)
}

/// Code unit of the `\uXXXX` escape starting at `at`, if it is a surrogate
fn surrogate_at(bytes: &[u8], at: usize) -> Option<u16> {
    let escape = bytes.get(at..at + 6)?;
    if !escape.starts_with(b"\\u") || !escape[2..].iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    let hex = std::str::from_utf8(&escape[2..]).ok()?;
    let unit = u16::from_str_radix(hex, 16).ok()?;
    (0xD800..=0xDFFF).contains(&unit).then_some(unit)
}

/// Flatten a run into one score per test followed by one per subtest.
///
/// Subtests are named `<test><SUBTEST_SEPARATOR><subtest>`. Only a `PASS`
/// status scores 1, and a test's score does not depend on its subtests.
pub fn process_raw_results(raw: RunResults) -> ScoringOutput {
    let mut test_scores = Vec::new();
    let mut test_names = IndexSet::new();

    for test in raw.results {
        record(
            &mut test_names,
            &mut test_scores,
            test.test.clone(),
            test.status.score(),
        );

        for subtest in test.subtests {
            let subtest_name = format!("{}{SUBTEST_SEPARATOR}{}", test.test, subtest.name);
            record(
                &mut test_names,
                &mut test_scores,
                subtest_name,
                subtest.status.score(),
            );
        }
    }

    ScoringOutput {
        run_info: raw.run_info,
        test_names,
        test_scores,
    }
}

fn record(
    test_names: &mut IndexSet<String>,
    test_scores: &mut Vec<ScoreEntry>,
    name: String,
    score: u8,
) {
    // Scores are kept per position even when names collide
    if !test_names.insert(name.clone()) {
        warn!("Duplicate test name in results: {name}");
    }
    test_scores.push(ScoreEntry { name, score });
}
