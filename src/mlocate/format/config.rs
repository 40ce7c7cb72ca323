//! Configuration block parsing.
//!
//! The block is a sequence of variable assignments:
//! ```text
//! name \0 value \0 value \0 ... \0
//! ```
//! Each assignment is a NUL-terminated name followed by zero or more
//! NUL-terminated values, closed by one more NUL. Assignments are therefore
//! separated by `\0\0`.

use log::{debug, trace, warn};
use crate::mlocate::types::{
    error::{MlocateError, Result},
    models::{ConfigParam, Configuration},
};
use crate::mlocate::utils;

const RECORD_SEPARATOR: [u8; 2] = [0, 0];

/// Parses the configuration block starting at `offset`.
///
/// # Returns
/// The decoded configuration and the offset at which directory records begin.
///
/// Some producers declare a block size that stops short of the final
/// assignment's closing `\0\0`. The missing NUL bytes are consumed here so the
/// directory records that follow stay aligned.
pub fn parse(bytes: &[u8], block_size: u32, offset: usize) -> Result<(Configuration, usize)> {
    let block_len = block_size as usize;
    let end = offset
        .checked_add(block_len)
        .filter(|&end| end <= bytes.len())
        .ok_or(MlocateError::TruncatedBuffer {
            context: "configuration block",
            needed: offset.saturating_add(block_len),
            available: bytes.len(),
        })?;

    let block = &bytes[offset..end];
    let missing = terminator_deficit(block);
    // A lone trailing NUL closes the last value, it does not start an empty one
    let assignments = if missing == 1 { &block[..block.len() - 1] } else { block };
    let mut configuration = Configuration::default();

    for record in split_records(assignments) {
        let mut fields = record.split(|&byte| byte == 0);
        let name = fields.next().map(utils::decode_text).unwrap_or_default();
        if name.is_empty() {
            continue;
        }

        match ConfigParam::from_name(&name) {
            Some(param) => {
                let values: Vec<String> = fields.map(utils::decode_text).collect();
                trace!("Configuration parameter {} = {:?}", param, values);
                *configuration.values_mut(param) = values;
            }
            None => warn!("Ignoring unknown configuration parameter '{}'", name),
        }
    }

    let completed = bytes[end..]
        .iter()
        .take(missing)
        .take_while(|&&byte| byte == 0)
        .count();
    if completed > 0 {
        warn!(
            "Configuration block size {} excludes {} terminator byte(s); consuming them",
            block_size, completed
        );
    }

    debug!("Configuration block parsed: {} bytes at offset {}", block_len + completed, offset);
    Ok((configuration, end + completed))
}

/// Splits the block on `\0\0`, the boundary between assignments.
fn split_records(mut block: &[u8]) -> Vec<&[u8]> {
    let mut records = Vec::new();
    while let Some(pos) = block.windows(2).position(|window| window == RECORD_SEPARATOR) {
        records.push(&block[..pos]);
        block = &block[pos + 2..];
    }
    if !block.is_empty() {
        records.push(block);
    }
    records
}

/// Number of NUL bytes the block is missing to close its last assignment.
fn terminator_deficit(block: &[u8]) -> usize {
    if block.is_empty() || block.ends_with(&RECORD_SEPARATOR) {
        0
    } else if block.ends_with(&[0]) {
        1
    } else {
        2
    }
}
