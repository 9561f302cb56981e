use thiserror::Error;

/// Errors raised by the painting domain itself
#[derive(Debug, Error)]
pub enum PaintError {
    #[error("Unknown brush type: {0:?}")]
    UnknownBrush(String),
}

/// Errors that can occur while loading or validating a [`crate::config::PaintConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
