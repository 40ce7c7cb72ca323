//! # mlocate-reader
//!
//! A reader for `mlocate.db` files, the databases `updatedb` builds for `locate`.
//! Decodes the header, the configuration block and every directory record
//! from an in-memory buffer.
pub mod mlocate;

// Re-export the main types for convenience
pub use mlocate::{
    MlocateError,
    MlocateReader,
    Result,
    iter::{Entry, EntryIterator},
    types::models::{
        ConfigParam,
        Configuration,
        Database,
        DecodeOptions,
        Directory,
        File,
        FileType,
        Header,
        MAGIC,
    },
};
