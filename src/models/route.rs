//! Hash-based location for the current directory.

use repo_browser_core::TreePath;

use crate::utils::dom;

/// Directory location mirrored in the URL hash.
/// URL format: `#/path/to/dir` (root is `#/`), each segment percent-encoded
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Route {
    path: TreePath,
}

impl Route {
    pub fn new(path: TreePath) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &TreePath {
        &self.path
    }

    /// Parse URL hash into Route, decoding each segment
    pub fn from_hash(hash: &str) -> Self {
        let path = hash
            .trim_start_matches('#')
            .split('/')
            .filter(|s| !s.is_empty())
            .fold(TreePath::root(), |path, segment| {
                path.join(&decode_segment(segment))
            });
        Self::new(path)
    }

    /// Convert Route to URL hash, encoding each segment
    pub fn to_hash(&self) -> String {
        let encoded: Vec<String> = self
            .path
            .segments()
            .iter()
            .map(|segment| String::from(js_sys::encode_uri_component(segment)))
            .collect();
        format!("#/{}", encoded.join("/"))
    }

    /// Get current route from browser URL
    pub fn current() -> Self {
        Self::from_hash(&dom::get_hash())
    }

    /// Record this route as a new history entry
    pub fn push(&self) {
        dom::push_hash(&self.to_hash());
    }

    /// Overwrite the current history entry with this route
    pub fn replace(&self) {
        dom::replace_hash(&self.to_hash());
    }
}

/// Percent-decode one segment; malformed escapes are kept as typed.
fn decode_segment(segment: &str) -> String {
    js_sys::decode_uri_component(segment)
        .ok()
        .and_then(|s| s.as_string())
        .unwrap_or_else(|| segment.to_string())
}
