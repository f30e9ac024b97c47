//! Error types for Overseer.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OverseerError {
    #[error("Agent error: {0}")]
    Agent(String),

    #[error("Task must specify a capability")]
    MissingCapability,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OverseerError>;
