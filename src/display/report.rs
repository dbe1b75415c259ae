//! Scan report rendering.

use std::io::{self, Write};

use colored::Color;

use super::DisplayContext;
use crate::config::OutputFormat;
use crate::error_handling::CommandError;
use crate::security::{ResponseSummary, ScanReport};

const RULE: &str = "--------------------------";

/// Announces the request about to be sent.
pub fn render_connecting<W: Write>(ctx: &DisplayContext, out: &mut W, url: &str) -> io::Result<()> {
    if ctx.format() == OutputFormat::Json {
        return Ok(());
    }
    writeln!(out, "Attempting to connect to: {url}")
}

/// Prints the response status and every raw response header before the
/// checklist.
///
/// Skipped for JSON output, where only the report is printed.
pub fn render_response_headers<W: Write>(
    ctx: &DisplayContext,
    out: &mut W,
    url: &str,
    summary: &ResponseSummary,
) -> io::Result<()> {
    if ctx.format() == OutputFormat::Json {
        return Ok(());
    }
    writeln!(out, "\n--- Headers for {url} ---")?;
    writeln!(out, "Status: {}", summary.status)?;
    for (name, value) in &summary.headers {
        writeln!(out, "{name}: {value}")?;
    }
    writeln!(out, "{RULE}\n")
}

/// Prints the checklist report.
///
/// Plain format prints one line per checklist header:
/// `- <Name>: Present|Missing[ (Value: <v>)] - <description>`. The value is
/// shown only when it is non-empty.
///
/// # Errors
///
/// Returns `CommandError::Io` on write failure and `CommandError::Serialize`
/// if the JSON report cannot be produced.
pub fn render_report<W: Write>(
    ctx: &DisplayContext,
    out: &mut W,
    report: &ScanReport,
) -> Result<(), CommandError> {
    match ctx.format() {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report)?;
            writeln!(out, "{json}")?;
        }
        OutputFormat::Plain => {
            writeln!(out, "--- Security Header Scan Results ---")?;
            for result in report.iter() {
                let status = if result.present {
                    ctx.paint(result.status(), Color::Green)
                } else {
                    ctx.paint(result.status(), Color::Red)
                };
                let value_info = match result.value.as_deref() {
                    Some(value) if !value.is_empty() => format!(" (Value: {value})"),
                    _ => String::new(),
                };
                writeln!(
                    out,
                    "- {}: {}{} - {}",
                    result.name, status, value_info, result.description
                )?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}
