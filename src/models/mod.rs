//! Data models and types for the application.
//!
//! - [`Episode`], [`Reference`] - episode feed records
//! - [`AppRoute`] - hash-based navigation

mod episode;
mod route;

pub use episode::{Episode, Reference, find_by_id, sort_newest_first};
pub use route::AppRoute;
