//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use reqwest::StatusCode;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors that end a single scan without producing a report.
///
/// None of these are fatal to the process: the command loop renders them and
/// waits for the next command.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The target could not be turned into a usable http(s) URL.
    #[error("Invalid URL '{input}': {reason}")]
    InvalidUrl {
        /// Target as typed by the user
        input: String,
        /// Why it was rejected
        reason: String,
    },

    /// The request could not be completed (DNS failure, refusal, timeout).
    #[error("Error connecting to {url} ({kind}): {source}")]
    Connection {
        /// Normalized URL the request was sent to
        url: String,
        /// Category of the underlying failure
        kind: ErrorType,
        /// Underlying HTTP client error
        #[source]
        source: ReqwestError,
    },

    /// A response arrived but its status is a client or server error.
    #[error("HTTP error for {url}: {status}")]
    HttpStatus {
        /// Normalized URL the request was sent to
        url: String,
        /// Status code returned by the server
        status: StatusCode,
    },
}

impl ScanError {
    /// Returns the `ErrorType` category for this error.
    pub fn error_type(&self) -> ErrorType {
        match self {
            ScanError::InvalidUrl { .. } => ErrorType::InvalidUrl,
            ScanError::Connection { kind, .. } => *kind,
            ScanError::HttpStatus { .. } => ErrorType::HttpRequestStatusError,
        }
    }
}

/// Errors raised while handling one interactive command.
#[derive(Error, Debug)]
pub enum CommandError {
    /// `scan` was typed without a target.
    #[error("Please provide a URL to scan. Usage: scan <URL>")]
    MissingUrl,

    /// The scan itself failed.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// Reading the prompt or writing output failed.
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The report could not be serialized.
    #[error("Report serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Categories of scan failures.
///
/// Used to label connection errors in user-facing messages and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // HTTP/Network errors
    HttpRequestBuilderError,
    HttpRequestRedirectError,
    HttpRequestStatusError,
    HttpRequestTimeoutError,
    HttpRequestRequestError,
    HttpRequestConnectError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    // Input errors
    InvalidUrl,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Returns a human-readable string representation of the error type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestStatusError => "HTTP request status error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::InvalidUrl => "Invalid URL",
        }
    }
}
