//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`fetch_structure`] - Structure document fetching
//! - [`dom`] - Window and location helpers

pub mod dom;
mod fetch;

pub use fetch::fetch_structure;
