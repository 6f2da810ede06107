//! Core logic for the podcast site.
//!
//! This module provides:
//! - [`sanitize`] - the allow-list HTML sanitizer for long descriptions
//! - [`error`] - fetch error types for the asset-loading boundary

pub mod error;
pub mod sanitize;

pub use error::FetchError;
pub use sanitize::{Policy, sanitize};
