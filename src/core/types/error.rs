use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The raw results argument is not valid JSON
    #[error("raw results are not valid JSON: {0}")]
    Parse(serde_json::Error),

    /// Valid JSON that is missing a field or has a field of the wrong type
    #[error("malformed raw results: {0}")]
    Structure(serde_json::Error),

    #[error("failed to encode score report: {0}")]
    Encode(serde_json::Error),

    #[error("invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
