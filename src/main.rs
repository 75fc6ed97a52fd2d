use std::process::ExitCode;

use wpt_scores::run_main;

fn main() -> ExitCode {
    match run_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Logging may be filtered off; fatal errors always reach stderr
            eprintln!("wpt-scores: {e}");
            ExitCode::FAILURE
        }
    }
}
