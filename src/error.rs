//! Centralized error handling for logindash

use std::io;
use thiserror::Error;

/// Custom error type for logindash operations
#[derive(Debug, Error)]
pub enum LogindashError {
    /// I/O errors (file reading, command execution)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),
    /// Malformed config file
    #[error("Config error: {0}")]
    Toml(#[from] toml::de::Error),
    /// System detection errors
    #[error("Detection error: {0}")]
    Detection(String),
}

/// Type alias for Results in logindash
pub type Result<T> = std::result::Result<T, LogindashError>;
