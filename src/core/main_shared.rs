use std::env;
use std::io::{self, Write};

use clap::Parser;
use log::debug;

use crate::core::cli::Args;
use crate::core::logging::init_logging;
use crate::core::report::process_json;
use crate::types::AppResult;
use crate::types::config::{CliOverrides, config, init_with_overrides};

pub fn run_main() -> AppResult<()> {
    let args = Args::parse();

    // Build CLI overrides for config precedence
    let cli_overrides = CliOverrides {
        log_level: args.log_level.clone(),
        log_color: args.log_color.clone(),
        pretty: args.pretty,
    };

    // Initialize configuration (file, then CLI overrides)
    init_with_overrides(&cli_overrides)?;

    // Initialize logging after config so level/color are applied
    init_logging();
    match env::current_dir() {
        Ok(cwd) => debug!("Current working directory: {}", cwd.display()),
        Err(e) => debug!("Current working directory unavailable: {e}"),
    }

    let report = process_json(&args.raw_results, config().output().pretty())?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{report}")?;
    stdout.flush()?;
    Ok(())
}
