use std::path::PathBuf;

use thiserror::Error;

/// Startup failures owned by the binary itself
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
