//! Front end error type

use siege_core::{ConfigError, SiegeError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to load siege rules: {0}")]
    Config(#[from] ConfigError),
    #[error("{}", .0.user_message())]
    Siege(#[from] SiegeError),
    #[error("Failed to encode result: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Usage(String),
}
