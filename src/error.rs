//! Crate-wide error type.

use thiserror::Error;

use crate::cli::ParseError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("settings file {path}: {source}")]
    Settings {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write passwords to {path}: {source}")]
    Output {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl Error {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Parse(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
