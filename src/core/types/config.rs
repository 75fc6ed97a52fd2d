use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use serde::Deserialize;

use crate::types::{AppError, AppResult};

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LogConfig {
    pub level: Option<String>,
    pub color: Option<bool>, // None = auto-detect (semantic)
}

impl LogConfig {
    /// Stdout carries the report, so only warnings and errors are logged by default
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("warn")
    }

    pub fn color(&self) -> Option<bool> {
        self.color // None has semantic meaning (auto-detect)
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct OutputConfig {
    pub pretty: Option<bool>,
}

impl OutputConfig {
    pub fn pretty(&self) -> bool {
        self.pretty.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    pub log: Option<LogConfig>,
    pub output: Option<OutputConfig>,
}

impl Config {
    pub fn log(&self) -> LogConfig {
        self.log.clone().unwrap_or_default()
    }

    pub fn output(&self) -> OutputConfig {
        self.output.clone().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub log_color: Option<String>, // "on" | "off"
    pub pretty: bool,
}

pub const CONFIG_FILENAME: &str = "wpt-scores.toml";

static CONFIG: OnceCell<Config> = OnceCell::new();

pub fn config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

/// Build the effective config: defaults, then the nearest config file, then CLI flags
pub fn init_with_overrides(overrides: &CliOverrides) -> AppResult<()> {
    let mut cfg = Config::default();

    // 1) Config file: walk up from cwd and use the first config file found
    if let Some(path) = find_nearest_config_file() {
        let file_cfg = read_config_file(&path)?;
        apply_file_config(&mut cfg, &file_cfg);
    }

    // 2) CLI arguments (highest priority). Only override if user specified.
    apply_cli_overrides(&mut cfg, overrides);

    let _ = CONFIG.set(cfg);
    Ok(())
}

pub fn read_config_file(path: &Path) -> AppResult<Config> {
    let contents = fs::read_to_string(path)?;
    toml::from_str::<Config>(&contents).map_err(|source| AppError::Config {
        path: path.to_path_buf(),
        source,
    })
}

pub fn apply_file_config(cfg: &mut Config, file: &Config) {
    if let Some(file_log) = &file.log {
        let mut log = cfg.log.clone().unwrap_or_default();
        if file_log.level.is_some() {
            log.level = file_log.level.clone();
        }
        if file_log.color.is_some() {
            log.color = file_log.color;
        }
        cfg.log = Some(log);
    }

    if let Some(file_output) = &file.output {
        let mut output = cfg.output.clone().unwrap_or_default();
        if file_output.pretty.is_some() {
            output.pretty = file_output.pretty;
        }
        cfg.output = Some(output);
    }
}

pub fn apply_cli_overrides(cfg: &mut Config, overrides: &CliOverrides) {
    let mut log = cfg.log.clone().unwrap_or_default();
    if let Some(level) = &overrides.log_level
        && !level.trim().is_empty()
    {
        log.level = Some(level.trim().to_string());
    }
    if let Some(color_str) = &overrides.log_color {
        match color_str.to_lowercase().as_str() {
            "on" => log.color = Some(true),
            "off" => log.color = Some(false),
            _ => {}
        }
    }
    if overrides.log_level.is_some() || overrides.log_color.is_some() {
        cfg.log = Some(log);
    }

    // --pretty can only switch pretty output on
    if overrides.pretty {
        let mut output = cfg.output.clone().unwrap_or_default();
        output.pretty = Some(true);
        cfg.output = Some(output);
    }
}

fn find_nearest_config_file() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd)
}

pub fn find_config_file_from(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}

/// Colors for log output, which goes to stderr
pub fn colors_enabled() -> bool {
    match config().log().color() {
        Some(force) => force,
        None => console::colors_enabled_stderr(),
    }
}
