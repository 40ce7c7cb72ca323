//! Custom error types for the mlocate-reader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum MlocateError {
    /// An error originating from I/O operations while loading a database file.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The fixed header prologue or the root path following it is unreadable.
    #[error("Malformed header: {0}")]
    MalformedHeader(String),

    /// The first 8 bytes are not the mlocate magic number.
    #[error("Invalid magic number: {found:02x?}")]
    InvalidMagic { found: [u8; 8] },

    /// A declared size points past the end of the buffer.
    #[error("Truncated buffer in {context}: need {needed} bytes, but only {available} available")]
    TruncatedBuffer {
        context: &'static str,
        needed: usize,
        available: usize,
    },

    /// A directory record is missing its path terminator or end-of-directory marker.
    #[error("Malformed directory record at offset {offset}: {reason}")]
    MalformedDirectory { offset: usize, reason: String },

    /// A file record carries a discriminator outside of file/subdirectory/end.
    #[error("Invalid file type discriminator: {0}")]
    InvalidFileType(u8),
}

/// A convenience `Result` type alias using the crate's `MlocateError` type.
pub type Result<T> = std::result::Result<T, MlocateError>;
