//! Directory reading and tree walking
//!
//! - `read_entries` lists one directory: dotfiles dropped, symlinks followed,
//!   directories first, then byte-wise by name.
//! - `TreeWalker` recurses depth-first and streams each line to a
//!   `TreeOutput`, tracking which ancestor columns still need a `│`.

mod config;
mod entry;
mod reader;
mod walker;

pub use config::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_ENTRIES, TreeConfig};
pub use entry::{Entry, EntryList};
pub use reader::read_entries;
pub use walker::{TreeOutput, TreeWalker, WalkStats};
