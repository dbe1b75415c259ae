//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeout, limits, tool identity)
//! - Security header name constants for the scan checklist
//! - CLI option types and parsing

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{Config, LogFormat, LogLevel, Opt, OutputFormat};
