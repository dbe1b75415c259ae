//! HTTP header name constants.
//!
//! This module defines the security headers that make up the scan checklist,
//! along with the text shown next to each of them in a report.

// Security header names
/// X-Frame-Options header
pub const HEADER_X_FRAME_OPTIONS: &str = "X-Frame-Options";
/// X-Content-Type-Options header
pub const HEADER_X_CONTENT_TYPE_OPTIONS: &str = "X-Content-Type-Options";
/// HTTP Strict Transport Security header
pub const HEADER_STRICT_TRANSPORT_SECURITY: &str = "Strict-Transport-Security";
/// Content Security Policy header
pub const HEADER_CONTENT_SECURITY_POLICY: &str = "Content-Security-Policy";
/// Referrer-Policy header
pub const HEADER_REFERRER_POLICY: &str = "Referrer-Policy";
/// Permissions-Policy header
pub const HEADER_PERMISSIONS_POLICY: &str = "Permissions-Policy";

// Informational headers
/// Server header (identifies server software)
pub const HEADER_SERVER: &str = "Server";

// Descriptions shown next to each checklist row
pub(crate) const DESC_X_FRAME_OPTIONS: &str = "Prevents clickjacking attacks.";
pub(crate) const DESC_X_CONTENT_TYPE_OPTIONS: &str = "Prevents MIME-sniffing attacks.";
pub(crate) const DESC_STRICT_TRANSPORT_SECURITY: &str = "Enforces HTTPS connections.";
pub(crate) const DESC_CONTENT_SECURITY_POLICY: &str =
    "Mitigates cross-site scripting (XSS) and data injection attacks.";
pub(crate) const DESC_REFERRER_POLICY: &str =
    "Controls how much referrer information is sent with requests.";
pub(crate) const DESC_PERMISSIONS_POLICY: &str = "Allows or disallows the use of browser features.";
pub(crate) const DESC_SERVER: &str =
    "Server software information (can sometimes reveal version for potential exploits).";
