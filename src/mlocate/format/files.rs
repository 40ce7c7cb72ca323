//! File entry parsing within a directory record.
//!
//! # Entry Structure
//! ```text
//! [1 byte ] Discriminator: 0 = file, 1 = subdirectory
//! [N bytes] Name, NUL-terminated
//! ...
//! [1 byte ] 2 = end of directory
//! ```

use log::warn;
use crate::mlocate::types::models::File;
use crate::mlocate::utils;

/// Discriminator byte marking the end of a directory's entries.
pub const END_OF_DIRECTORY: u8 = 2;

#[derive(Debug)]
enum State {
    AwaitingDiscriminator,
    AccumulatingName { kind: u8, start: usize },
}

/// Parses file entries until the end-of-directory marker.
///
/// Discriminators are stored unchecked; see [`File::file_type`].
///
/// # Returns
/// The entries and the number of bytes consumed including the marker, or
/// `None` if the slice ends before the marker is found.
pub fn parse(bytes: &[u8]) -> Option<(Vec<File>, usize)> {
    let mut files = Vec::new();
    let mut state = State::AwaitingDiscriminator;

    for (pos, &byte) in bytes.iter().enumerate() {
        state = match state {
            State::AwaitingDiscriminator if byte == END_OF_DIRECTORY => {
                return Some((files, pos + 1));
            }
            State::AwaitingDiscriminator => State::AccumulatingName { kind: byte, start: pos + 1 },
            State::AccumulatingName { kind, start } if byte == 0 => {
                files.push(File::new(kind, utils::decode_text(&bytes[start..pos])));
                State::AwaitingDiscriminator
            }
            State::AccumulatingName { start, .. } if byte == END_OF_DIRECTORY => {
                warn!(
                    "End-of-directory marker inside an entry name; discarding {} partial byte(s)",
                    pos - start
                );
                return Some((files, pos + 1));
            }
            accumulating @ State::AccumulatingName { .. } => accumulating,
        };
    }

    None
}
