//! Error types for icsgen.

use thiserror::Error;

/// Errors that can occur while resolving input or writing a calendar.
#[derive(Error, Debug)]
pub enum IcsGenError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not read '{path}' as a delimited file: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for icsgen operations.
pub type IcsGenResult<T> = Result<T, IcsGenError>;
