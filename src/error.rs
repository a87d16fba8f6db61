//! Error types for central directory enumeration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while binding or enumerating a ZIP archive.
#[derive(Debug, Error)]
pub enum Error {
    /// The path has no extension, or not the archive extension.
    #[error("invalid input {}: {reason}", .path.display())]
    InvalidInput { path: PathBuf, reason: String },

    /// The archive file could not be opened for reading.
    #[error("failed to open {}: {source}", .path.display())]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Enumeration was requested before an archive was bound.
    #[error("no archive bound, call set_input first")]
    NotInitialized,

    /// A forward scan ran past the end of the archive without finding a signature.
    #[error("unexpected end of archive while scanning from offset {offset}")]
    UnexpectedEof { offset: u64 },

    /// A position taken from header data lies outside the archive.
    #[error("corrupt archive: offset {offset} is outside the {len} byte stream")]
    CorruptArchive { offset: u64, len: u64 },

    /// No end of central directory signature exists anywhere in the archive.
    #[error("could not find end of central directory record")]
    EocdrNotFound,

    /// A read on the underlying source failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Fieldless view of [`Error`], handy for matching on the category alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    OpenFailed,
    NotInitialized,
    UnexpectedEof,
    CorruptArchive,
    EocdrNotFound,
    Io,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidInput { .. } => ErrorKind::InvalidInput,
            Error::OpenFailed { .. } => ErrorKind::OpenFailed,
            Error::NotInitialized => ErrorKind::NotInitialized,
            Error::UnexpectedEof { .. } => ErrorKind::UnexpectedEof,
            Error::CorruptArchive { .. } => ErrorKind::CorruptArchive,
            Error::EocdrNotFound => ErrorKind::EocdrNotFound,
            Error::Io(_) => ErrorKind::Io,
        }
    }
}

/// Result type for archive operations.
pub type Result<T> = std::result::Result<T, Error>;
