//! TreeWalker - depth-first traversal that streams each line to a `TreeOutput`

use std::ffi::OsStr;
use std::io;
use std::path::Path;

use log::{debug, warn};

use crate::error::Result;

use super::config::TreeConfig;
use super::entry::{Entry, EntryList};
use super::reader::read_entries;

/// Callback for streaming output - receives each line of the tree in order.
pub trait TreeOutput {
    /// The starting path, printed once before anything else.
    fn output_root(&mut self, name: &OsStr) -> io::Result<()>;

    /// One entry. `branches[d]` is true when the ancestor at depth `d` still
    /// has siblings to come, so its column needs a continuation glyph.
    fn output_entry(&mut self, entry: &Entry, branches: &[bool], is_last: bool) -> io::Result<()>;

    /// Called once after the last entry; must flush anything buffered.
    fn finish(&mut self, stats: &WalkStats) -> io::Result<()>;
}

/// Counters collected during a walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkStats {
    pub directories: usize,
    pub files: usize,
    /// Nested directories that could not be opened and were shown empty.
    pub unreadable_dirs: usize,
    /// Entries omitted because their status query failed.
    pub skipped_entries: usize,
    /// Directories whose listing hit the entry cap.
    pub truncated_dirs: usize,
    /// Directories printed but not descended into because of the depth cap.
    pub depth_limited_dirs: usize,
}

impl WalkStats {
    /// True when any part of the tree was left out.
    pub fn has_problems(&self) -> bool {
        self.unreadable_dirs > 0
            || self.skipped_entries > 0
            || self.truncated_dirs > 0
            || self.depth_limited_dirs > 0
    }

    fn record_listing(&mut self, path: &Path, list: &EntryList, max_entries: usize) {
        self.skipped_entries += list.skipped;
        if list.truncated {
            self.truncated_dirs += 1;
            warn!(
                "{}: more than {} entries, listing truncated",
                path.display(),
                max_entries
            );
        }
    }
}

/// Streaming tree walker. Uses O(depth) memory for continuation state plus
/// one sorted listing per open directory.
pub struct TreeWalker {
    config: TreeConfig,
}

impl TreeWalker {
    pub fn new(config: TreeConfig) -> Self {
        Self { config }
    }

    /// Walk `root` and stream every line to `output`.
    ///
    /// Fails with `RootUnavailable` before printing anything if `root` cannot
    /// be opened as a directory. Problems below the root only show up in the
    /// returned stats.
    pub fn walk<O: TreeOutput>(&self, root: &Path, output: &mut O) -> Result<WalkStats> {
        let entries =
            read_entries(root, self.config.max_entries).map_err(|e| e.into_root())?;

        let mut stats = WalkStats::default();
        stats.record_listing(root, &entries, self.config.max_entries);

        output.output_root(root.as_os_str())?;

        let mut branches = Vec::with_capacity(self.config.max_depth);
        self.walk_entries(root, &entries, &mut branches, output, &mut stats)?;

        if stats.has_problems() {
            warn!(
                "incomplete tree: {} unreadable directories, {} skipped entries, \
                 {} truncated directories, {} directories past the depth limit",
                stats.unreadable_dirs,
                stats.skipped_entries,
                stats.truncated_dirs,
                stats.depth_limited_dirs
            );
        }

        output.finish(&stats)?;
        Ok(stats)
    }

    fn walk_entries<O: TreeOutput>(
        &self,
        path: &Path,
        entries: &EntryList,
        branches: &mut Vec<bool>,
        output: &mut O,
        stats: &mut WalkStats,
    ) -> Result<()> {
        let depth = branches.len();
        let total = entries.len();

        for (i, entry) in entries.iter().enumerate() {
            let is_last = i == total - 1;

            output.output_entry(entry, branches, is_last)?;

            if !entry.is_dir() {
                stats.files += 1;
                continue;
            }
            stats.directories += 1;

            let child_path = path.join(entry.name());

            if depth + 1 >= self.config.max_depth {
                stats.depth_limited_dirs += 1;
                warn!(
                    "{}: deeper than {} levels, not descending",
                    child_path.display(),
                    self.config.max_depth
                );
                continue;
            }

            let children = match read_entries(&child_path, self.config.max_entries) {
                Ok(children) => children,
                Err(e) => {
                    debug!("{}", e);
                    stats.unreadable_dirs += 1;
                    continue;
                }
            };
            stats.record_listing(&child_path, &children, self.config.max_entries);

            branches.push(!is_last);
            let result = self.walk_entries(&child_path, &children, branches, output, stats);
            branches.pop();
            result?;
        }

        Ok(())
    }
}
