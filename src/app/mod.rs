//! Main application modules.
//!
//! This module provides the URL normalization used before every scan.

pub mod url;

// Re-export public API
pub use url::normalize_target_url;
