//! mlocate file header parsing.
//!
//! # Header Structure
//! ```text
//! [8 bytes] Magic number "\0mlocate"
//! [4 bytes] Configuration block size (big-endian u32)
//! [1 byte ] File format version
//! [1 byte ] Require visibility flag
//! [2 bytes] Padding
//! [N bytes] Root path, NUL-terminated
//! ```

use byteorder::{BigEndian, ByteOrder};
use log::{debug, trace};
use crate::mlocate::types::{
    error::{MlocateError, Result},
    models::{DecodeOptions, Header, MAGIC},
};
use crate::mlocate::utils;

/// Size of the fixed part of the header, before the root path.
pub const PROLOGUE_LEN: usize = 16;

/// Parses the header from the beginning of the database.
///
/// # Returns
/// The header and the offset at which the configuration block begins
/// (the fixed prologue plus the root path and its terminator).
pub fn parse(bytes: &[u8], options: &DecodeOptions) -> Result<(Header, usize)> {
    if bytes.len() < PROLOGUE_LEN {
        return Err(MlocateError::MalformedHeader(format!(
            "Header too short: {} bytes (minimum {} required)",
            bytes.len(),
            PROLOGUE_LEN
        )));
    }

    let magic: [u8; 8] = utils::fixed(&bytes[0..8]);
    if options.verify_magic && &magic != MAGIC {
        return Err(MlocateError::InvalidMagic { found: magic });
    }

    let config_block_size = BigEndian::read_u32(&bytes[8..12]);
    let file_format_version = bytes[12];
    let require_visibility = bytes[13];
    let reserved: [u8; 2] = utils::fixed(&bytes[14..16]);
    trace!(
        "Header fields: config_block_size={}, version={}, require_visibility={}",
        config_block_size, file_format_version, require_visibility
    );

    let (path_bytes, path_len) = utils::split_nul_terminated(&bytes[PROLOGUE_LEN..])
        .ok_or_else(|| MlocateError::MalformedHeader("Root path is not NUL-terminated".to_string()))?;
    let database_path = utils::decode_text(path_bytes);

    debug!("Header parsed: root='{}', config block {} bytes", database_path, config_block_size);

    let header = Header {
        magic,
        config_block_size,
        file_format_version,
        require_visibility,
        reserved,
        database_path,
    };
    Ok((header, PROLOGUE_LEN + path_len))
}
