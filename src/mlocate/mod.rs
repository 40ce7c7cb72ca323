//! Core mlocate database reader module

pub mod format;
pub mod iter;
pub mod reader;
pub mod types;
mod utils;

pub use reader::MlocateReader;
pub use types::error::{MlocateError, Result};
