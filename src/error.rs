//! Error types for fritoto
//!
//! Every failure aborts the run. The variants are grouped the way they
//! surface to the user: usage, input and output errors.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the library
pub type Result<T> = std::result::Result<T, FritotoError>;

/// Errors that can occur while producing an attestation
#[derive(Debug, Error)]
pub enum FritotoError {
    /// No subject files were given on the command line
    #[error("no subject files specified")]
    NoSubjects,

    /// A subject file could not be hashed
    #[error("hashing files: {0}")]
    Hash(#[from] HashError),

    /// The `--time` value is not an RFC 3339 timestamp
    #[error("invalid --time {input:?}: {source}")]
    InvalidTime {
        /// The rejected input
        input: String,
        /// Underlying parse error
        source: chrono::ParseError,
    },

    /// The configuration file could not be loaded
    #[error("config {path}: {reason}")]
    Config {
        /// Path of the offending config file
        path: PathBuf,
        /// What went wrong
        reason: String,
    },

    /// The output file could not be created
    #[error("creating {path}: {source}")]
    CreateOutput {
        /// Requested output path
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// The statement could not be serialized
    #[error("serializing statement: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing to the output sink failed
    #[error("writing attestation: {0}")]
    Write(#[from] std::io::Error),
}

impl FritotoError {
    /// Build a config error from anything printable
    pub fn config(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Config {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Errors raised by a [`FileHasher`](crate::core::ports::FileHasher)
#[derive(Debug, Error)]
pub enum HashError {
    /// The subject could not be opened or read
    #[error("reading {path}: {source}")]
    Io {
        /// The subject path
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// The subject exists but is not a regular file
    #[error("not a regular file: {0}")]
    NotAFile(PathBuf),
}
