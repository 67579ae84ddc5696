//! Path resolution against the repository tree.

use crate::error::NavError;
use crate::path::TreePath;
use crate::tree::{Directory, TreeNode};

/// Resolve `path` to the directory it names, starting at `root`.
///
/// Resolution only ever lands on a directory. A missing segment, or a
/// segment naming a file, fails with the offending segment and the path of
/// the directory it was looked up in.
pub fn resolve<'a>(root: &'a Directory, path: &TreePath) -> Result<&'a Directory, NavError> {
    let mut current = root;

    for (depth, segment) in path.segments().iter().enumerate() {
        current = match current.get(segment) {
            Some(TreeNode::Directory(dir)) => dir,
            Some(TreeNode::File(_)) => {
                return Err(NavError::NotADirectory {
                    segment: segment.clone(),
                    parent: path.truncate(depth).to_string(),
                });
            }
            None => {
                return Err(NavError::NotFound {
                    segment: segment.clone(),
                    parent: path.truncate(depth).to_string(),
                });
            }
        };
    }

    Ok(current)
}
