use std::fs;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use tempfile::{TempDir, tempdir};

const INPUT: &str = r#"{"run_info": {"product": "x"}, "results": [{"test": "t1", "status": "PASS", "subtests": [{"name": "s1", "status": "FAIL"}]}]}"#;
const EXPECTED: &str = r#"{"run_info":{"product":"x"},"test_scores":[{"name":"t1","score":1},{"name":"t1::s1","score":0}]}"#;

/// Run the binary from an empty temp dir so no stray config file is picked up
fn run_in(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wpt-scores"))
        .current_dir(dir.path())
        .args(args)
        .output()
        .expect("Failed to run wpt-scores")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn prints_single_line_report() {
    let dir = tempdir().unwrap();
    let output = run_in(&dir, &[INPUT]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), format!("{EXPECTED}\n"));
}

#[test]
fn pretty_flag_spans_lines() {
    let dir = tempdir().unwrap();
    let output = run_in(&dir, &["--pretty", INPUT]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.lines().count() > 1);
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    let expected: serde_json::Value = serde_json::from_str(EXPECTED).unwrap();
    assert_eq!(parsed, expected);
}

#[test]
fn config_file_enables_pretty_output() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("wpt-scores.toml"),
        "[output]\npretty = true\n",
    )
    .unwrap();
    let output = run_in(&dir, &[INPUT]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("{\n  \"run_info\""));
}

#[test]
fn logs_go_to_stderr_only() {
    let dir = tempdir().unwrap();
    let output = run_in(&dir, &["--log.level", "debug", "--log.color", "off", INPUT]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), format!("{EXPECTED}\n"));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("[info] Scored 1 tests and 1 subtests"), "{stderr}");
}

#[test]
fn malformed_json_fails_without_output() {
    let dir = tempdir().unwrap();
    let output = run_in(&dir, &["{\"run_info\": "]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("not valid JSON"), "{stderr}");
}

#[test]
fn missing_field_fails_without_output() {
    let dir = tempdir().unwrap();
    let output = run_in(&dir, &[r#"{"run_info": {}, "results": [{"test": "t", "status": "PASS"}]}"#]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("missing field `subtests`"), "{stderr}");
}

#[test]
fn invalid_config_file_is_fatal() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("wpt-scores.toml"), "[output\n").unwrap();
    let output = run_in(&dir, &[INPUT]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn lone_surrogate_in_payload_is_accepted() {
    let dir = tempdir().unwrap();
    let output = run_in(
        &dir,
        &[r#"{"run_info": {}, "results": [{"test": "t", "status": "PASS", "subtests": [{"name": "lone \ud800", "status": "PASS"}]}]}"#],
    );
    assert!(output.status.success());
    assert!(stdout(&output).contains("\"t::lone \u{fffd}\""));
}

#[cfg(unix)]
#[test]
fn removed_working_directory_does_not_fail_debug_logging() {
    let dir = tempdir().unwrap();
    let output = Command::new("sh")
        .current_dir(dir.path())
        .args([
            "-c",
            r#"mkdir gone && cd gone && rmdir ../gone && exec "$0" --log.level debug "$1""#,
            env!("CARGO_BIN_EXE_wpt-scores"),
            INPUT,
        ])
        .output()
        .expect("Failed to run wpt-scores");
    assert!(output.status.success(), "{:?}", output);
    assert_eq!(stdout(&output), format!("{EXPECTED}\n"));
}

#[test]
fn missing_argument_is_a_usage_error() {
    let dir = tempdir().unwrap();
    let output = run_in(&dir, &[]);
    assert_eq!(output.status.code(), Some(2));
}
