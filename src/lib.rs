//! Minitree - a small tree: directories first, dotfiles hidden

pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, TreeError};
pub use output::{OutputConfig, StreamingFormatter};
pub use tree::{Entry, EntryList, TreeConfig, TreeOutput, TreeWalker, WalkStats, read_entries};
