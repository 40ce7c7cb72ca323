use std::path::Path;
use log::info;

use super::format;
use super::types::error::Result;
use super::types::models::{Database, DecodeOptions};

/// The entry point for decoding mlocate databases.
///
/// Decoding runs over a single in-memory buffer and either produces a complete
/// [`Database`] or fails; there is no partial result.
#[derive(Debug, Clone, Copy, Default)]
pub struct MlocateReader {
    options: DecodeOptions,
}

impl MlocateReader {
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    /// Read and decode the database file at `path`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - File cannot be read
    /// - Header is too short or the magic number does not match
    /// - Configuration block runs past the end of the file
    /// - A directory record is malformed
    pub fn open(&self, path: impl AsRef<Path>) -> Result<Database> {
        let path = path.as_ref();
        info!("Opening mlocate database: {}", path.display());
        let bytes = std::fs::read(path)?;
        self.decode(&bytes)
    }

    /// Decode a complete database held in memory.
    pub fn decode(&self, bytes: &[u8]) -> Result<Database> {
        let (header, config_offset) = format::header::parse(bytes, &self.options)?;

        let (configuration, directories_offset) =
            format::config::parse(bytes, header.config_block_size, config_offset)?;

        let directories = format::directory::parse_all(bytes, directories_offset)?;

        let database = Database {
            header,
            configuration,
            directories,
        };
        info!(
            "mlocate database decoded: root='{}', {} directories, {} entries",
            database.header.database_path,
            database.directories.len(),
            database.num_entries()
        );
        Ok(database)
    }

    /// Decode with default options.
    pub fn from_bytes(bytes: &[u8]) -> Result<Database> {
        Self::default().decode(bytes)
    }

    pub fn from_bytes_with(bytes: &[u8], options: DecodeOptions) -> Result<Database> {
        Self::new(options).decode(bytes)
    }
}
