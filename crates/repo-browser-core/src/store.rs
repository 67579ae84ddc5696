//! Single-assignment holder for the repository tree.

use std::sync::OnceLock;

use crate::error::StoreError;
use crate::tree::Directory;

/// Holds the root directory once it has been loaded.
///
/// The store starts empty, accepts exactly one tree and is read-only from
/// then on.
#[derive(Debug, Default)]
pub struct TreeStore {
    root: OnceLock<Directory>,
}

impl TreeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the root directory. Fails if a tree is already held.
    pub fn set(&self, root: Directory) -> Result<(), StoreError> {
        self.root.set(root).map_err(|_| StoreError::AlreadyLoaded)
    }

    /// The root directory, or `None` if not loaded yet.
    pub fn get(&self) -> Option<&Directory> {
        self.root.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TreeNode;

    #[test]
    fn test_store_starts_empty() {
        let store = TreeStore::new();
        assert!(store.get().is_none());
    }

    #[test]
    fn test_store_is_single_assignment() {
        let store = TreeStore::new();
        let first: Directory = [("a", TreeNode::file("html", Some(1)))].into_iter().collect();

        store.set(first.clone()).unwrap();
        assert_eq!(store.set(Directory::new()), Err(StoreError::AlreadyLoaded));
        assert_eq!(store.get(), Some(&first));
    }
}
