//! Error types for qoa2wav

use thiserror::Error;

/// Result type alias for qoa2wav operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for qoa2wav
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// QOA bitstream could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[from] qoaudio::DecodeError),

    /// Container format error
    #[error("Format error: {0}")]
    Format(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create a format error
    pub fn format<S: Into<String>>(msg: S) -> Self {
        Error::Format(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Error::InvalidInput(msg.into())
    }
}
