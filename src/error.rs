//! Error types for directory exploration

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while exploring a directory tree.
///
/// `List` and `Stat` are recoverable: the offending directory or entry is
/// reported and skipped, and the run carries on. Everything else ends the run.
#[derive(Error, Debug)]
pub enum ExploreError {
    /// A directory's children could not be enumerated
    #[error("cannot read directory '{}': {source}", .path.display())]
    List {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Metadata for a single entry could not be retrieved
    #[error("cannot stat '{}': {source}", .path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The starting path does not exist
    #[error("The directory '{}' does not exist.", .0.display())]
    RootNotFound(PathBuf),

    /// The answer to the exploration prompt could not be read
    #[error("failed to read answer: {0}")]
    Prompt(#[source] io::Error),

    /// Writing output failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl ExploreError {
    /// Whether traversal should report this error and continue.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::List { .. } | Self::Stat { .. })
    }

    /// The path this error refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::List { path, .. } | Self::Stat { path, .. } | Self::RootNotFound(path) => {
                Some(path.as_path())
            }
            Self::Prompt(_) | Self::Io(_) => None,
        }
    }
}

/// Specialized Result type for exploration
pub type Result<T> = std::result::Result<T, ExploreError>;
