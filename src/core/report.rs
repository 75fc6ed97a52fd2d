use log::{debug, info};

use crate::core::flatten::{parse_raw_results, process_raw_results};
use crate::types::{AppError, AppResult, ScoringOutput};

/// Serialize a report with `run_info` and `test_scores` only
pub fn render_report(output: &ScoringOutput, pretty: bool) -> AppResult<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(output)
    } else {
        serde_json::to_string(output)
    };
    rendered.map_err(AppError::Encode)
}

/// Parse raw results, flatten them and render the score report
pub fn process_json(input: &str, pretty: bool) -> AppResult<String> {
    debug!("Parsing {} bytes of raw results", input.len());
    let raw = parse_raw_results(input)?;

    let summary = raw.summary();
    info!(
        "Scored {} tests and {} subtests: {:.1}% passed ({} / {})",
        summary.tests,
        summary.subtests,
        summary.percent_passed(),
        summary.passed(),
        summary.entries()
    );

    render_report(&process_raw_results(raw), pretty)
}
