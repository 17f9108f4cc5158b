//! Error types for zipdir-core

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Core error types for the zipdir library
#[derive(Error, Debug)]
pub enum Error {
    /// Source path does not exist; raised before any writer is opened
    #[error("Source not found: {0}")]
    SourceNotFound(PathBuf),

    /// I/O error while reading a source file mid-stream
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// I/O error on the output sink while writing an entry payload
    #[error("Failed to write entry {name}: {source}")]
    Write {
        name: String,
        #[source]
        source: io::Error,
    },

    /// ZIP container error
    #[error("Zip error: {0}")]
    Zip(String),

    /// Invalid file or directory path
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Build aborted through the cancellation flag
    #[error("Operation cancelled")]
    Cancelled,

    /// Other I/O failure (directory listing, metadata)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::Zip(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
