//! Sequential access to every entry of a decoded database.
//!
//! # Example
//! ```no_run
//! # use mlocate_reader::MlocateReader;
//! # let db = MlocateReader::default().open("/var/lib/mlocate/mlocate.db").unwrap();
//! for entry in db.entries() {
//!     println!("{}", entry.path());
//! }
//! ```

use std::slice;

use super::types::error::Result;
use super::types::models::{Database, Directory, File, FileType};

/// A child entry together with the directory that lists it.
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
    pub directory: &'a Directory,
    pub file: &'a File,
}

impl Entry<'_> {
    /// Full path of the entry: the directory path joined with the entry name.
    pub fn path(&self) -> String {
        let dir = self.directory.path.as_str();
        if dir.ends_with('/') {
            format!("{}{}", dir, self.file.name)
        } else {
            format!("{}/{}", dir, self.file.name)
        }
    }

    pub fn file_type(&self) -> Result<FileType> {
        self.file.file_type()
    }
}

/// Iterator over all entries, directory by directory in on-disk order.
///
/// Created by [`Database::entries()`].
pub struct EntryIterator<'a> {
    directories: slice::Iter<'a, Directory>,
    current: Option<(&'a Directory, slice::Iter<'a, File>)>,
}

impl<'a> EntryIterator<'a> {
    pub(super) fn new(database: &'a Database) -> Self {
        Self {
            directories: database.directories.iter(),
            current: None,
        }
    }
}

impl<'a> Iterator for EntryIterator<'a> {
    type Item = Entry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((directory, files)) = self.current.as_mut()
                && let Some(file) = files.next()
            {
                return Some(Entry { directory: *directory, file });
            }

            // Current directory exhausted, move to the next one
            let directory = self.directories.next()?;
            self.current = Some((directory, directory.files.iter()));
        }
    }
}

impl Database {
    /// Returns an iterator over every directory entry in the database.
    pub fn entries(&self) -> EntryIterator<'_> {
        EntryIterator::new(self)
    }
}
