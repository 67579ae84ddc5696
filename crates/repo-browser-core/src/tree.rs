//! Repository tree model.
//!
//! The structure document is a nested JSON object. An object carrying a
//! string `type` is a file; any other object is a directory whose keys are
//! child names. The variant is decided once here, at parse time, so the
//! rest of the crate never inspects fields to tell the two apart.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// A node of the repository tree.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum TreeNode {
    // Must stay first: untagged deserialization tries variants in order.
    File(FileNode),
    Directory(Directory),
}

impl TreeNode {
    /// Create a file node.
    pub fn file(kind: impl Into<String>, size: Option<u64>) -> Self {
        Self::File(FileNode {
            kind: kind.into(),
            size,
        })
    }

    /// Check if this node is a directory.
    pub fn is_directory(&self) -> bool {
        matches!(self, Self::Directory(_))
    }

    /// Get the directory (directories only).
    pub fn as_directory(&self) -> Option<&Directory> {
        match self {
            Self::Directory(dir) => Some(dir),
            Self::File(_) => None,
        }
    }

    /// Get the file (files only).
    pub fn as_file(&self) -> Option<&FileNode> {
        match self {
            Self::File(file) => Some(file),
            Self::Directory(_) => None,
        }
    }
}

impl From<Directory> for TreeNode {
    fn from(dir: Directory) -> Self {
        Self::Directory(dir)
    }
}

impl From<FileNode> for TreeNode {
    fn from(file: FileNode) -> Self {
        Self::File(file)
    }
}

/// A leaf of the tree.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FileNode {
    /// Type tag (e.g. "apk", "tar.gz", "html")
    #[serde(rename = "type")]
    pub kind: String,
    /// Size in bytes (None when unknown)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// A directory: child name to child node.
///
/// Children are kept in a `BTreeMap` so serialized documents are stable.
/// Display order is computed by the listing, never taken from here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Directory {
    children: BTreeMap<String, TreeNode>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a structure document whose root must be a directory.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        match serde_json::from_str::<TreeNode>(json)? {
            TreeNode::Directory(dir) => Ok(dir),
            TreeNode::File(_) => Err(LoadError::RootIsFile),
        }
    }

    /// Look up a direct child by name.
    pub fn get(&self, name: &str) -> Option<&TreeNode> {
        self.children.get(name)
    }

    /// Insert a child, replacing any previous child of the same name.
    pub fn insert(&mut self, name: impl Into<String>, node: impl Into<TreeNode>) {
        self.children.insert(name.into(), node.into());
    }

    /// Iterate over direct children.
    pub fn children(&self) -> impl Iterator<Item = (&str, &TreeNode)> {
        self.children.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, TreeNode)> for Directory {
    fn from_iter<I: IntoIterator<Item = (K, TreeNode)>>(iter: I) -> Self {
        Self {
            children: iter
                .into_iter()
                .map(|(name, node)| (name.into(), node))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_discriminates_files_and_directories() {
        let root = Directory::from_json(
            r#"{
                "apks": { "app.apk": { "type": "apk", "size": 2048 } },
                "index.html": { "type": "html" }
            }"#,
        )
        .unwrap();

        let apks = root.get("apks").and_then(TreeNode::as_directory).unwrap();
        assert_eq!(
            apks.get("app.apk"),
            Some(&TreeNode::file("apk", Some(2048)))
        );
        assert_eq!(root.get("index.html"), Some(&TreeNode::file("html", None)));
    }

    #[test]
    fn test_child_named_type_stays_directory() {
        let root = Directory::from_json(r#"{ "type": {}, "size": { "a": { "type": "pub" } } }"#)
            .unwrap();

        assert!(root.get("type").unwrap().is_directory());
        assert!(root.get("size").unwrap().is_directory());
    }

    #[test]
    fn test_empty_object_is_directory() {
        let root = Directory::from_json("{}").unwrap();
        assert!(root.is_empty());
    }

    #[test]
    fn test_root_file_is_load_error() {
        assert_eq!(
            Directory::from_json(r#"{ "type": "html", "size": 3 }"#),
            Err(LoadError::RootIsFile)
        );
    }

    #[test]
    fn test_malformed_documents() {
        assert!(matches!(
            Directory::from_json("{ not json"),
            Err(LoadError::Parse(_))
        ));
        assert!(matches!(
            Directory::from_json("[1, 2, 3]"),
            Err(LoadError::Parse(_))
        ));
        assert!(matches!(
            Directory::from_json(r#"{ "a": 1 }"#),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn test_serialize_wire_shape() {
        let mut root = Directory::new();
        root.insert("b.tar.gz", TreeNode::file("tar.gz", Some(10)));
        root.insert("a", Directory::new());
        root.insert("c", TreeNode::file("file", None));

        let json = serde_json::to_string(&root).unwrap();
        assert_eq!(
            json,
            r#"{"a":{},"b.tar.gz":{"type":"tar.gz","size":10},"c":{"type":"file"}}"#
        );
        assert_eq!(Directory::from_json(&json).unwrap(), root);
    }
}
