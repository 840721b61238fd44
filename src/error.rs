//! Error handling for the career pathfinder

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PathfinderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Unknown career: {0}")]
    UnknownCareer(String),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, PathfinderError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for PathfinderError {
    fn from(err: anyhow::Error) -> Self {
        PathfinderError::Processing(err.to_string())
    }
}
