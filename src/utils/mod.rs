//! Utility modules for web, DOM, and formatting concerns.
//!
//! - [`fetch`] - network fetching with timeout racing
//! - [`cache`] - sessionStorage caching for the episode feed
//! - [`format`] - date formatting for display
//! - [`dom`] - thin browser API accessors

pub mod cache;
pub mod dom;
pub mod fetch;
pub mod format;

pub use fetch::{fetch_json_cached, fetch_text};
pub use format::format_date_long;
