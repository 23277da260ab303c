use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by expstat.
#[derive(Error, Debug)]
pub enum StatError {
    /// The root directory to scan does not exist.
    #[error("Root directory not found: {0}")]
    RootNotFound(PathBuf),

    /// A log file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report file could not be opened for append or written to.
    #[error("Failed to write report {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the expstat crates.
pub type Result<T> = std::result::Result<T, StatError>;
