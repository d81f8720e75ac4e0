//! Application layer errors

use thiserror::Error;

/// General bot errors
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Platform error: {0}")]
    Platform(String),

    #[error("Invalid channel: {0}")]
    InvalidChannel(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Command execution errors, reported back to the channel as text
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    #[error("{0}")]
    Usage(String),

    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("Image ID '{0}' not found")]
    ImageNotFound(String),
}

/// Errors talking to the space-weather API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("API returned HTTP {0}")]
    Status(u16),

    #[error("could not decode response: {0}")]
    Decode(String),

    #[error("invalid request URL: {0}")]
    Url(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status(status.as_u16())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
