//! UI components built with Leptos.
//!
//! - [`router`] - hash-based page routing
//! - [`layout`] - injected header/footer regions
//! - [`episodes`] - episode grid, list, and detail rendering

pub mod episodes;
pub mod layout;
pub mod router;

pub use layout::{SiteFooter, SiteHeader};
pub use router::AppRouter;
