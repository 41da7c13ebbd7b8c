//! Error types for directory reading and tree rendering

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the reader and the walker.
///
/// Only `RootUnavailable` and `Io` ever reach the user. A nested
/// `DirectoryUnavailable` is absorbed by the walker and rendered as an
/// empty subtree.
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("cannot open directory '{}': {source}", .path.display())]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot access '{}': {source}", .path.display())]
    RootUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    Io(#[from] io::Error),
}

impl TreeError {
    /// Promote a reader failure on the starting path to the fatal variant.
    pub fn into_root(self) -> Self {
        match self {
            TreeError::DirectoryUnavailable { path, source } => {
                TreeError::RootUnavailable { path, source }
            }
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, TreeError>;
