//! Security header evaluation.
//!
//! This module provides the [`HeaderEvaluator`], which sends one GET request to
//! a target and classifies the response headers against the fixed checklist:
//!
//! - `X-Frame-Options`, `X-Content-Type-Options`, `Strict-Transport-Security`
//! - `Content-Security-Policy`, `Referrer-Policy`, `Permissions-Policy`
//! - `Server` (informational banner)
//!
//! A scan either produces a complete [`ScanReport`] or fails with a
//! [`ScanError`]; partial reports are never returned.

mod checklist;
mod types;

#[cfg(test)]
mod tests;

use std::time::Duration;

use log::{debug, info, warn};
use reqwest::header::HeaderMap;
use reqwest::StatusCode;

use crate::app::normalize_target_url;
use crate::error_handling::{categorize_reqwest_error, InitializationError, ScanError};
use crate::initialization::init_client;

pub use checklist::{checklist_position, HeaderCheckEntry, CHECKLIST};
pub use types::{HeaderCheckResult, ResponseSummary, ScanReport};

/// Checks a single URL for the checklist headers.
///
/// Holds the HTTP client so repeated scans reuse its connection pool. Scans
/// share no other state.
#[derive(Debug, Clone)]
pub struct HeaderEvaluator {
    client: reqwest::Client,
}

impl HeaderEvaluator {
    /// Creates an evaluator whose requests time out after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self, InitializationError> {
        Ok(Self::with_client(init_client(timeout)?))
    }

    /// Creates an evaluator around an existing client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Scans `url_input` and returns the checklist report.
    ///
    /// A missing scheme is replaced by `http://` before the request is sent.
    ///
    /// # Errors
    ///
    /// - `ScanError::InvalidUrl` if the input cannot be normalized
    /// - `ScanError::Connection` on DNS failure, refusal or timeout
    /// - `ScanError::HttpStatus` on a 4xx or 5xx response
    pub async fn evaluate(&self, url_input: &str) -> Result<ScanReport, ScanError> {
        self.evaluate_with_response(url_input)
            .await
            .map(|(report, _)| report)
    }

    /// Like [`evaluate`](Self::evaluate), also returning the raw response headers.
    pub async fn evaluate_with_response(
        &self,
        url_input: &str,
    ) -> Result<(ScanReport, ResponseSummary), ScanError> {
        let url = normalize_target_url(url_input)?;
        info!("Scanning {url}");

        let response = self.client.get(&url).send().await.map_err(|source| {
            let kind = categorize_reqwest_error(&source);
            warn!("Request to {url} failed ({kind}): {source}");
            ScanError::Connection {
                url: url.clone(),
                kind,
                source,
            }
        })?;

        let status = response.status();
        if url::Url::parse(&url).ok().as_ref() != Some(response.url()) {
            debug!("{url} was redirected to {}", response.url());
        }
        if status.is_client_error() || status.is_server_error() {
            warn!("{url} answered with {status}");
            return Err(ScanError::HttpStatus { url, status });
        }

        let headers = response.headers();
        let report = classify(&url, headers);
        debug!(
            "{url}: {}/{} checklist headers present",
            report.present_count(),
            CHECKLIST.len()
        );
        Ok((report, summarize(status, headers)))
    }
}

/// Classifies a response header map against the checklist.
///
/// Lookups are case-insensitive. A header sent more than once is reported with
/// its values joined by `", "`. Values that are not valid UTF-8 are decoded lossily.
pub fn classify(url: &str, headers: &HeaderMap) -> ScanReport {
    let mut report = ScanReport::seeded(url);
    for entry in CHECKLIST.iter() {
        let values: Vec<String> = headers
            .get_all(entry.name)
            .iter()
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .collect();
        if !values.is_empty() {
            report.mark_present(entry.name, values.join(", "));
        }
    }
    report
}

fn summarize(status: StatusCode, headers: &HeaderMap) -> ResponseSummary {
    ResponseSummary {
        status: status.as_u16(),
        headers: headers
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect(),
    }
}
