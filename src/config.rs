//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Site name used in page titles and placeholders.
pub const APP_NAME: &str = "Wavecast";

// =============================================================================
// Asset URLs (same-origin static files)
// =============================================================================

/// Episode feed.
pub const DATA_URL: &str = "data/episodes.json";

/// Shared header partial, injected into the `site-header` region.
pub const HEADER_PARTIAL_URL: &str = "components/header.html";

/// Shared footer partial, injected into the `site-footer` region.
pub const FOOTER_PARTIAL_URL: &str = "components/footer.html";

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Rendering Configuration
// =============================================================================

/// Number of episodes shown in the home page grid.
pub const LATEST_EPISODE_COUNT: usize = 3;

// =============================================================================
// Cache Configuration
// =============================================================================

/// Session cache configuration.
pub mod cache {
    /// sessionStorage key for the episode feed.
    pub const EPISODES_KEY: &str = "episodes_cache";
}
