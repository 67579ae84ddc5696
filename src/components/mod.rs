//! UI components built with Leptos.
//!
//! - [`Breadcrumb`] - Ancestor trail of the current directory
//! - [`FileList`] - Sorted listing of the current directory
//! - [`icons`] - Centralized icon definitions (change theme here)

mod breadcrumb;
mod file_list;
pub mod icons;

pub use breadcrumb::Breadcrumb;
pub use file_list::FileList;
