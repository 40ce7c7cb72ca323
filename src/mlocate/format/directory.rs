//! Directory record parsing.
//!
//! The rest of the file after the configuration block is a sequence of
//! directory records with no count or length prefix; the sequence ends with
//! the buffer.
//!
//! # Record Structure
//! ```text
//! [8 bytes] Directory time, seconds (big-endian u64)
//! [4 bytes] Directory time, nanoseconds (big-endian u32)
//! [4 bytes] Padding
//! [N bytes] Directory path, NUL-terminated
//! [M bytes] File entries, closed by the end-of-directory marker
//! ```

use byteorder::{BigEndian, ByteOrder};
use log::{debug, trace};
use crate::mlocate::types::{
    error::{MlocateError, Result},
    models::Directory,
};
use crate::mlocate::{format::files, utils};

/// Size of the fixed part of a directory record, before the path.
pub const PREFIX_LEN: usize = 16;

/// Decodes directory records from `offset` until the buffer is exhausted.
///
/// Stops once fewer than 2 bytes remain; a single trailing byte can not hold
/// another record.
pub fn parse_all(bytes: &[u8], offset: usize) -> Result<Vec<Directory>> {
    let mut directories = Vec::new();
    let mut pos = offset;

    while bytes.len().saturating_sub(pos) > 1 {
        let (directory, consumed) = parse(&bytes[pos..], pos)?;
        trace!(
            "Directory '{}' at offset {}: {} entries, {} bytes",
            directory.path, pos, directory.files.len(), consumed
        );
        directories.push(directory);
        pos += consumed;
    }

    debug!("Parsed {} directory records", directories.len());
    Ok(directories)
}

/// Decodes a single directory record at the start of `bytes`.
///
/// `offset` is the record's position in the whole database and is only used
/// for error reporting.
///
/// # Returns
/// The directory and the number of bytes it occupies, including the
/// end-of-directory marker.
pub fn parse(bytes: &[u8], offset: usize) -> Result<(Directory, usize)> {
    let malformed = |reason: &str| MlocateError::MalformedDirectory {
        offset,
        reason: reason.to_string(),
    };

    if bytes.len() < PREFIX_LEN {
        return Err(malformed("record shorter than the 16-byte prefix"));
    }

    let time_seconds = BigEndian::read_u64(&bytes[0..8]);
    let time_nanos = BigEndian::read_u32(&bytes[8..12]);
    let reserved: [u8; 4] = utils::fixed(&bytes[12..16]);

    let (path_bytes, path_len) = utils::split_nul_terminated(&bytes[PREFIX_LEN..])
        .ok_or_else(|| malformed("directory path is not NUL-terminated"))?;
    let path = utils::decode_text(path_bytes);

    let entries_start = PREFIX_LEN + path_len;
    let (files, entries_len) = files::parse(&bytes[entries_start..])
        .ok_or_else(|| malformed("missing end-of-directory marker"))?;

    let directory = Directory {
        time_seconds,
        time_nanos,
        reserved,
        path,
        files,
    };
    Ok((directory, entries_start + entries_len))
}
