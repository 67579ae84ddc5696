//! Data models for the web app.
//!
//! - [`Route`] - Hash-based location of the current directory

mod route;

pub use route::Route;
