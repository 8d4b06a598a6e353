//! Error types shared by the exercise crates.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the exercises and their front end
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input outside the domain an exercise is defined on
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration validation error
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Shorthand for an [`Error::InvalidArgument`] with a formatted message.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}
