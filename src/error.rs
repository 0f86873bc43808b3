use thiserror::Error;

/// Errors raised while loading or saving a [`crate::config::CaptureConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Errors raised while exporting or importing a session record
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to serialize session: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to access session file: {0}")]
    Io(#[from] std::io::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
pub type SessionResult<T> = Result<T, SessionError>;
