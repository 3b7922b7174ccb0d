use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the explorer library.
#[derive(Error, Debug)]
pub enum ExplorerError {
    /// A city dataset could not be opened or read from disk.
    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV row could not be parsed or deserialized.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A record's start time did not match the expected date-time format.
    #[error("Invalid start time: {0}")]
    TimestampParse(String),

    /// An aggregate (mode, mean, min/max) was requested over a zero-row
    /// table. Filtering can legitimately produce such tables; the statistic
    /// is undefined rather than zero.
    #[error("Cannot compute {0}: the filtered table has no rows")]
    EmptyTable(&'static str),

    /// The input source ran out of lines before a valid value was read.
    #[error("Input closed before a valid value was entered")]
    InputClosed,

    /// Pass-through for raw I/O errors on the console.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ExplorerError>;
