//! Directory entries and the ordered per-directory listing

use std::cmp::Ordering;
use std::ffi::{OsStr, OsString};

/// One immediate child of a scanned directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: OsString,
    is_dir: bool,
}

impl Entry {
    pub fn new(name: impl Into<OsString>, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            is_dir,
        }
    }

    pub fn name(&self) -> &OsStr {
        &self.name
    }

    /// Raw name bytes as stored on the filesystem.
    pub fn name_bytes(&self) -> &[u8] {
        self.name.as_encoded_bytes()
    }

    /// Classified from a status query that follows symlinks, so a link to a
    /// directory counts as a directory.
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Dotfiles are never listed.
    pub fn is_hidden_name(name: &OsStr) -> bool {
        name.as_encoded_bytes().first() == Some(&b'.')
    }

    /// Directories first, then byte-wise by name.
    pub fn display_order(&self, other: &Self) -> Ordering {
        other
            .is_dir
            .cmp(&self.is_dir)
            .then_with(|| self.name_bytes().cmp(other.name_bytes()))
    }
}

/// Sorted children of one directory, plus what was left out of it.
#[derive(Debug, Clone, Default)]
pub struct EntryList {
    entries: Vec<Entry>,
    /// The directory held more qualifying entries than the configured cap.
    pub truncated: bool,
    /// Entries dropped because their status query failed.
    pub skipped: usize,
}

impl EntryList {
    /// Sort `entries` into display order.
    pub fn new(mut entries: Vec<Entry>) -> Self {
        entries.sort_by(Entry::display_order);
        Self {
            entries,
            truncated: false,
            skipped: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a EntryList {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
