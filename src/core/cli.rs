use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Raw WPT run results as a JSON string: {"run_info": ..., "results": [...]}
    #[arg(value_name = "RAW_RESULTS")]
    pub raw_results: String,

    /// Logging level (overrides config). One of: trace, debug, info, warn, error, off
    #[arg(long = "log.level")]
    pub log_level: Option<String>,

    /// Logging color control: "on" to force colors, "off" to disable; omit for auto
    #[arg(long = "log.color")]
    pub log_color: Option<String>,

    /// Pretty-print the score report instead of writing a single line
    #[arg(long)]
    pub pretty: bool,
}
