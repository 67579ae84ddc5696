//! Icon lookup for listing rows.

use crate::tree::TreeNode;

/// Semantic icon of a listing row.
///
/// Front ends map these to their own icon set; [`IconKind::glyph`] is the
/// plain-text rendition used in terminals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconKind {
    Folder,
    /// `apk` packages
    Package,
    /// `tar.gz` archives
    Archive,
    /// `pub` public keys
    PublicKey,
    /// `html` pages
    Document,
    /// Any unrecognized type tag
    Generic,
}

impl IconKind {
    /// Icon for a file type tag.
    pub fn for_file_type(kind: &str) -> Self {
        match kind {
            "apk" => Self::Package,
            "tar.gz" => Self::Archive,
            "pub" => Self::PublicKey,
            "html" => Self::Document,
            _ => Self::Generic,
        }
    }

    /// Icon for a tree node. Directories are always folders.
    pub fn for_node(node: &TreeNode) -> Self {
        match node {
            TreeNode::Directory(_) => Self::Folder,
            TreeNode::File(file) => Self::for_file_type(&file.kind),
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Folder => "📁",
            Self::Package => "📦",
            Self::Archive => "🗜️",
            Self::PublicKey => "🔑",
            Self::Document | Self::Generic => "📄",
        }
    }
}
