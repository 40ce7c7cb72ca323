//! Core data structures for decoded mlocate databases.
//!
//! This module defines the value types produced by the decoder:
//! - The file header and its decode options
//! - The configuration block and its closed set of parameters
//! - Directory records and the file entries they contain

use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use super::error::{MlocateError, Result};

/// Magic number at the very start of every mlocate database.
pub const MAGIC: &[u8; 8] = b"\0mlocate";

/// Options controlling how strictly a database is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Reject buffers whose first 8 bytes are not [`MAGIC`].
    ///
    /// When disabled the header is still decoded and the raw bytes are kept
    /// in [`Header::magic`] for the caller to inspect.
    pub verify_magic: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self { verify_magic: true }
    }
}

/// Fixed-layout file header plus the root path that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub magic: [u8; 8],
    /// Size of the configuration block in bytes.
    pub config_block_size: u32,
    pub file_format_version: u8,
    /// Raw flag byte; `1` means results must be checked against the caller's permissions.
    pub require_visibility: u8,
    pub reserved: [u8; 2],
    /// Path name of the root of the database.
    pub database_path: String,
}

impl Header {
    pub fn has_valid_magic(&self) -> bool {
        &self.magic == MAGIC
    }

    pub fn requires_visibility(&self) -> bool {
        self.require_visibility != 0
    }
}

/// The indexing parameters recognised in the configuration block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigParam {
    PruneBindMounts,
    PruneFs,
    PruneNames,
    PrunePaths,
}

impl ConfigParam {
    pub const ALL: [ConfigParam; 4] = [
        ConfigParam::PruneBindMounts,
        ConfigParam::PruneFs,
        ConfigParam::PruneNames,
        ConfigParam::PrunePaths,
    ];

    /// The parameter name as it is written in the configuration block.
    pub fn name(&self) -> &'static str {
        match self {
            ConfigParam::PruneBindMounts => "prune_bind_mounts",
            ConfigParam::PruneFs => "prunefs",
            ConfigParam::PruneNames => "prunenames",
            ConfigParam::PrunePaths => "prunepaths",
        }
    }

    /// Returns `None` for names this reader does not know about.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|param| param.name() == name)
    }
}

impl fmt::Display for ConfigParam {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parameters `updatedb` was run with when the database was built.
///
/// Values are kept verbatim and in on-disk order. Parameters missing from the
/// block have no values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    /// A single entry, `"0"` or `"1"`.
    pub prune_bind_mounts: Vec<String>,
    pub prunefs: Vec<String>,
    pub prunenames: Vec<String>,
    pub prunepaths: Vec<String>,
}

impl Configuration {
    pub fn values(&self, param: ConfigParam) -> &[String] {
        match param {
            ConfigParam::PruneBindMounts => &self.prune_bind_mounts,
            ConfigParam::PruneFs => &self.prunefs,
            ConfigParam::PruneNames => &self.prunenames,
            ConfigParam::PrunePaths => &self.prunepaths,
        }
    }

    pub(crate) fn values_mut(&mut self, param: ConfigParam) -> &mut Vec<String> {
        match param {
            ConfigParam::PruneBindMounts => &mut self.prune_bind_mounts,
            ConfigParam::PruneFs => &mut self.prunefs,
            ConfigParam::PruneNames => &mut self.prunenames,
            ConfigParam::PrunePaths => &mut self.prunepaths,
        }
    }

    /// Looks a parameter up by its on-disk name.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        ConfigParam::from_name(name).map(|param| self.values(param))
    }
}

/// Kind of a file entry, decoded from its discriminator byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    File,
    Subdirectory,
    /// End-of-directory marker.
    End,
}

impl FileType {
    pub fn label(&self) -> &'static str {
        match self {
            FileType::File => "file",
            FileType::Subdirectory => "subdirectory",
            FileType::End => "end",
        }
    }
}

impl TryFrom<u8> for FileType {
    type Error = MlocateError;
    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::File),
            1 => Ok(Self::Subdirectory),
            2 => Ok(Self::End),
            _ => Err(MlocateError::InvalidFileType(value)),
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single child entry of a directory.
///
/// The discriminator is stored as read and only validated when the type is
/// asked for, so an unexpected byte does not stop the rest of the database
/// from decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub(crate) kind: u8,
    /// File name without its directory.
    pub name: String,
}

impl File {
    pub fn new(kind: u8, name: impl Into<String>) -> Self {
        Self { kind, name: name.into() }
    }

    pub fn raw_type(&self) -> u8 {
        self.kind
    }

    pub fn file_type(&self) -> Result<FileType> {
        FileType::try_from(self.kind)
    }

    /// Human-readable type: `"file"`, `"subdirectory"` or `"end"`.
    pub fn type_label(&self) -> Result<&'static str> {
        self.file_type().map(|file_type| file_type.label())
    }
}

/// One directory record and its direct children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    /// Maximum of `st_ctime` and `st_mtime`, whole seconds.
    pub time_seconds: u64,
    /// Nanosecond part of the same timestamp.
    pub time_nanos: u32,
    pub reserved: [u8; 4],
    pub path: String,
    pub files: Vec<File>,
}

impl Directory {
    /// The directory timestamp as a `SystemTime`.
    ///
    /// Returns `None` if the stored value does not fit the platform's clock.
    pub fn modified(&self) -> Option<SystemTime> {
        Duration::from_secs(self.time_seconds)
            .checked_add(Duration::from_nanos(u64::from(self.time_nanos)))
            .and_then(|since_epoch| UNIX_EPOCH.checked_add(since_epoch))
    }
}

/// A fully decoded mlocate database.
///
/// Directories appear in on-disk order, which is a pre-order walk of the
/// indexed tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Database {
    pub header: Header,
    pub configuration: Configuration,
    pub directories: Vec<Directory>,
}

impl Database {
    /// Total number of child entries across all directories.
    pub fn num_entries(&self) -> usize {
        self.directories.iter().map(|dir| dir.files.len()).sum()
    }

    /// Finds the directory record with exactly this path.
    pub fn directory(&self, path: &str) -> Option<&Directory> {
        self.directories.iter().find(|dir| dir.path == path)
    }
}
