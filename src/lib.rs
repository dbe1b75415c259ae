//! webtester library: HTTP security header checklist
//!
//! This library sends a single GET request to a URL and reports which of a
//! fixed set of security-related response headers are present, along with
//! their raw values. It is an educational checklist, not a vulnerability
//! scanner: no crawling, no payloads, no TLS analysis and no scoring.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use webtester::HeaderEvaluator;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let evaluator = HeaderEvaluator::new(Duration::from_secs(10))?;
//! let report = evaluator.evaluate("example.com").await?;
//! for result in report.iter() {
//!     println!("{}: {}", result.name, result.status());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Scans are async and need a Tokio runtime. The binary uses a single-threaded
//! runtime and awaits each scan before reading the next command.

#![warn(missing_docs)]

pub mod app;
pub mod config;
pub mod display;
pub mod error_handling;
pub mod initialization;
pub mod security;
pub mod shell;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Opt, OutputFormat};
pub use display::DisplayContext;
pub use error_handling::{CommandError, ErrorType, ScanError};
pub use security::{
    classify, HeaderCheckEntry, HeaderCheckResult, HeaderEvaluator, ResponseSummary, ScanReport,
    CHECKLIST,
};
pub use shell::{Command, CommandLoop};
