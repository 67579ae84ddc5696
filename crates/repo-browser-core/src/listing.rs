//! Directory listing: sorted rows with icon, name and size.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::format::format_size;
use crate::icon::IconKind;
use crate::path::TreePath;
use crate::tree::{Directory, TreeNode};

/// Message shown in place of a listing for a directory without children.
pub const EMPTY_DIRECTORY_MESSAGE: &str = "This directory is empty";

/// Rendered contents of a directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Listing {
    /// No children: show [`EMPTY_DIRECTORY_MESSAGE`] and no rows
    Empty,
    /// Rows in presentation order
    Entries(Vec<ListingRow>),
}

impl Listing {
    pub fn rows(&self) -> &[ListingRow] {
        match self {
            Self::Empty => &[],
            Self::Entries(rows) => rows,
        }
    }
}

/// One row of a listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingRow {
    pub name: String,
    pub icon: IconKind,
    /// Formatted size (files only)
    pub size: Option<String>,
    pub action: RowAction,
}

impl ListingRow {
    pub fn is_directory(&self) -> bool {
        matches!(self.action, RowAction::Navigate(_))
    }
}

/// What activating a row does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowAction {
    /// Navigate in place to a directory
    Navigate(TreePath),
    /// Plain hyperlink to a file, relative to the page
    Link(String),
}

/// Render the direct children of `dir`, which lives at `path`.
///
/// Directories come first, then files; names are collated within each group.
pub fn listing(dir: &Directory, path: &TreePath) -> Listing {
    if dir.is_empty() {
        return Listing::Empty;
    }

    let mut entries: Vec<(&str, &TreeNode)> = dir.children().collect();
    entries.sort_by(|(a_name, a), (b_name, b)| {
        b.is_directory()
            .cmp(&a.is_directory())
            .then_with(|| collate(a_name, b_name))
    });

    let rows = entries
        .into_iter()
        .map(|(name, node)| {
            let full_path = path.join(name);
            let (size, action) = match node {
                TreeNode::Directory(_) => (None, RowAction::Navigate(full_path)),
                TreeNode::File(file) => (
                    Some(format_size(file.size)),
                    RowAction::Link(full_path.to_string()),
                ),
            };
            ListingRow {
                name: name.to_string(),
                icon: IconKind::for_node(node),
                size,
                action,
            }
        })
        .collect();

    Listing::Entries(rows)
}

/// Compare names the way a human-facing list orders them.
///
/// Base letters decide first, ignoring accents and case (`é` sorts with `e`).
/// Then unaccented before accented, then lowercase before uppercase, which
/// keeps the order total.
pub fn collate(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| lowercase(a).cmp(&lowercase(b)))
        .then_with(|| b.nfd().cmp(a.nfd()))
        .then_with(|| a.cmp(b))
}

/// Lowercased letters with accents stripped.
fn base_letters(s: &str) -> Vec<char> {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn lowercase(s: &str) -> Vec<char> {
    s.nfd().flat_map(char::to_lowercase).collect()
}
