//! Slash-delimited tree paths.

use std::fmt;

/// A normalized path from the root directory.
///
/// # Path Convention
///
/// - Root: no segments, displayed as `""`
/// - Nested: `"apks/stable"`
/// - Empty segments (leading, trailing or repeated `/`) are dropped on parse
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TreePath {
    segments: Vec<String>,
}

impl TreePath {
    /// The root path.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a raw path, discarding empty segments.
    pub fn parse(raw: &str) -> Self {
        Self {
            segments: raw
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments below the root.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Path of a direct child.
    pub fn join(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        Self { segments }
    }

    /// Ancestor keeping the first `depth` segments (root for 0).
    pub fn truncate(&self, depth: usize) -> Self {
        Self {
            segments: self.segments.iter().take(depth).cloned().collect(),
        }
    }
}

impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

impl From<&str> for TreePath {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}
