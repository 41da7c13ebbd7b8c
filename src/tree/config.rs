//! Configuration types for the tree walker

/// Default cap on entries collected from a single directory.
pub const DEFAULT_MAX_ENTRIES: usize = 256;

/// Default number of entry levels printed below the root.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Limits applied while walking a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
    /// Qualifying entries collected per directory. Anything past this is
    /// silently dropped (counted as a truncated directory).
    pub max_entries: usize,
    /// Entries at depth `< max_depth` are printed. A directory sitting at
    /// depth `max_depth - 1` is printed but not descended into.
    pub max_depth: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
