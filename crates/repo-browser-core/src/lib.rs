//! Core of the repository browser.
//!
//! Target-independent logic shared by the web app and the CLI:
//! - [`Directory`], [`TreeNode`] - the repository tree, parsed once
//! - [`TreeStore`] - single-assignment holder for the loaded tree
//! - [`TreePath`], [`resolve`] - path normalization and resolution
//! - [`breadcrumb`], [`listing`] - the two rendered regions
//! - [`Browser`] - explicit application state tying them together

mod breadcrumb;
mod browser;
mod error;
mod format;
mod icon;
mod listing;
mod navigate;
mod path;
mod store;
mod tree;

pub use breadcrumb::{Crumb, ROOT_LABEL, breadcrumb};
pub use browser::{Browser, LOAD_ERROR_MESSAGE, LoadState, View};
pub use error::{LoadError, NavError, StoreError};
pub use format::format_size;
pub use icon::IconKind;
pub use listing::{EMPTY_DIRECTORY_MESSAGE, Listing, ListingRow, RowAction, collate, listing};
pub use navigate::resolve;
pub use path::TreePath;
pub use store::TreeStore;
pub use tree::{Directory, FileNode, TreeNode};
