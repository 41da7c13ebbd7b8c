//! Directory reader: lists, classifies and orders one directory's children

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Result, TreeError};

use super::entry::{Entry, EntryList};

/// Read the immediate children of `path` into display order.
///
/// Dotfiles are skipped. Every other entry is classified with a status query
/// that follows symlinks; entries whose status cannot be read are dropped and
/// counted in `EntryList::skipped`. Collection stops once `max_entries`
/// entries are held, and `EntryList::truncated` is set if at least one more
/// non-hidden name was left unread.
///
/// The directory handle is released before this returns.
pub fn read_entries(path: &Path, max_entries: usize) -> Result<EntryList> {
    let dir = fs::read_dir(path).map_err(|source| TreeError::DirectoryUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();
    let mut skipped = 0usize;
    let mut truncated = false;

    for dir_entry in dir {
        let dir_entry = match dir_entry {
            Ok(e) => e,
            Err(e) => {
                debug!("{}: error reading directory entry: {}", path.display(), e);
                skipped += 1;
                continue;
            }
        };

        let name = dir_entry.file_name();
        if Entry::is_hidden_name(&name) {
            continue;
        }

        if entries.len() >= max_entries {
            truncated = true;
            break;
        }

        let full_path = path.join(&name);
        match fs::metadata(&full_path) {
            Ok(meta) => entries.push(Entry::new(name, meta.is_dir())),
            Err(e) => {
                debug!("{}: skipped: {}", full_path.display(), e);
                skipped += 1;
            }
        }
    }

    let mut list = EntryList::new(entries);
    list.truncated = truncated;
    list.skipped = skipped;
    Ok(list)
}
