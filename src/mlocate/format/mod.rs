//! File format parsing layer for mlocate databases.
//!
//! Each stage works on the in-memory database and reports how far it read,
//! so the next stage knows where to start.
//!
//! # Module Organization
//!
//! - [`header`]: Parses the fixed prologue and the root path
//! - [`config`]: Parses the configuration block of `updatedb` parameters
//! - [`directory`]: Parses the sequence of directory records
//! - [`files`]: Parses the file entries inside one directory record
//!
//! # Architecture
//!
//! ```text
//! File Structure:
//! ┌─────────────────────┐
//! │  Header + root path │ ← header::parse()
//! ├─────────────────────┤
//! │  Configuration      │ ← config::parse()
//! ├─────────────────────┤
//! │  Directory record   │ ← directory::parse()
//! │    file entries     │ ← files::parse()
//! ├─────────────────────┤
//! │  ... until EOF      │
//! └─────────────────────┘
//! ```

pub mod config;
pub mod directory;
pub mod files;
pub mod header;
