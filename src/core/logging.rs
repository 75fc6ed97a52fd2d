use console::Style;
use log::{Level, LevelFilter};

use crate::types::config::{colors_enabled, config};

/// Route `log` records to stderr at the configured level.
///
/// Must run after config initialization. Calling it twice is a no-op.
pub fn init_logging() {
    let level = parse_level(config().log().level());
    let colors = colors_enabled();

    let _ = fern::Dispatch::new()
        .format(move |out, message, record| {
            let label = level_label(record.level(), colors);
            out.finish(format_args!("{label} {message}"))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply();
}

/// Unknown level names fall back to warn
pub fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(LevelFilter::Warn)
}

fn level_label(level: Level, colors: bool) -> String {
    let label = format!("[{}]", level.as_str().to_lowercase());
    if !colors {
        return label;
    }
    let style = match level {
        Level::Error => Style::new().red().bold(),
        Level::Warn => Style::new().yellow(),
        Level::Info => Style::new().green(),
        Level::Debug => Style::new().blue(),
        Level::Trace => Style::new().dim(),
    };
    style.force_styling(true).apply_to(label).to_string()
}
