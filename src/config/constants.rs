//! Configuration constants.
//!
//! This module defines the operational constants used throughout the application,
//! including the request timeout, input limits and the tool identity.

use std::time::Duration;

/// Display name of the tool (used in the banner and goodbye message)
pub const TOOL_NAME: &str = "WebTester";

/// Tool version shown in the banner
pub const TOOL_VERSION: &str = "0.1";

/// Per-request timeout in seconds
/// Covers DNS, connect, TLS and the full response; a scan never waits longer than this
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Per-request timeout as a `Duration`
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

/// Scheme prepended to targets typed without one.
/// Plain HTTP on purpose: the checklist reports on whatever the site serves there.
pub const DEFAULT_SCHEME: &str = "http://";

/// Maximum URL length (2048 characters), matching common browser and server limits
pub const MAX_URL_LENGTH: usize = 2048;

/// Prompt shown by the interactive loop
pub const PROMPT: &str = "Enter Command: ";
