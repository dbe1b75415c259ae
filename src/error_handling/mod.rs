//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization, scans and interactive commands
//! - Categorization of HTTP client failures
//!
//! Scan and command errors are always recovered at the command loop boundary;
//! only initialization errors stop the process.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{CommandError, ErrorType, InitializationError, ScanError};
