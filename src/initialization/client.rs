//! HTTP client initialization.
//!
//! This module provides the function that builds the HTTP client used for scans.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for scans.
///
/// Creates a `reqwest::Client` configured with:
/// - The given overall request timeout (connect, TLS and response combined)
/// - The library default User-Agent and redirect policy
/// - No default headers and no cookie store
///
/// # Arguments
///
/// * `timeout` - Ceiling for a single request
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(timeout: Duration) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new().timeout(timeout).build()?;
    Ok(client)
}
