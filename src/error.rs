use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HygieneGuardError {
    #[error("Invalid exclude pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid header pattern: {pattern}")]
    InvalidHeaderPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HygieneGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
