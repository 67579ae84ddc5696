//! Breadcrumb trail for the current path.

use crate::path::TreePath;

/// Label of the synthetic first crumb.
pub const ROOT_LABEL: &str = "root";

/// One clickable ancestor in the trail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    /// Path navigated to when the crumb is activated
    pub target: TreePath,
}

/// Build the trail for `path`: the root crumb, then one crumb per segment
/// targeting the path truncated after that segment.
pub fn breadcrumb(path: &TreePath) -> Vec<Crumb> {
    let root = Crumb {
        label: ROOT_LABEL.to_string(),
        target: TreePath::root(),
    };

    std::iter::once(root)
        .chain(path.segments().iter().enumerate().map(|(idx, segment)| Crumb {
            label: segment.clone(),
            target: path.truncate(idx + 1),
        }))
        .collect()
}
