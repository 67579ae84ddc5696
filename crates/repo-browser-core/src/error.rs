//! Error types for loading and navigating a repository tree.
//!
//! - [`LoadError`] - the structure document could not be obtained or parsed
//! - [`StoreError`] - the tree store was asked to hold a second tree
//! - [`NavError`] - a path does not name a directory in the tree

use thiserror::Error;

/// Failure to produce the root directory from the structure document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// Network or transport failure before any document was read.
    #[error("failed to fetch structure document: {0}")]
    Fetch(String),
    /// The document is not valid JSON or does not have the tree shape.
    #[error("invalid structure document: {0}")]
    Parse(String),
    /// The document root is a file, not a directory.
    #[error("structure document root is a file, not a directory")]
    RootIsFile,
    /// The tree store already holds a tree.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Tree store errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store is single-assignment.
    #[error("repository tree is already loaded")]
    AlreadyLoaded,
}

/// Reasons a navigation request is abandoned.
///
/// These never reach the user; the current view simply stays in place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// Navigation was requested before the tree finished loading.
    #[error("repository tree is not loaded")]
    NotLoaded,
    /// A segment does not exist in its parent directory.
    #[error("'{segment}' not found in '/{parent}'")]
    NotFound { segment: String, parent: String },
    /// A segment names a file where a directory was expected.
    #[error("'{segment}' in '/{parent}' is a file, not a directory")]
    NotADirectory { segment: String, parent: String },
}
