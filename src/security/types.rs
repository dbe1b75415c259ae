//! Scan result types.

use serde::Serialize;

use super::checklist::{checklist_position, HeaderCheckEntry, CHECKLIST};

/// Outcome for one checklist entry after a response has been inspected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCheckResult {
    /// Header name, as listed in the checklist
    pub name: &'static str,
    /// What the header protects against
    pub description: &'static str,
    /// Whether the response carried the header
    pub present: bool,
    /// Raw header value, `None` when the header is missing
    pub value: Option<String>,
}

impl HeaderCheckResult {
    /// Creates the pre-inspection result for an entry.
    pub fn seed(entry: &HeaderCheckEntry) -> Self {
        Self {
            name: entry.name,
            description: entry.description,
            present: entry.default_present,
            value: None,
        }
    }

    /// Human-readable status ("Present" or "Missing")
    pub fn status(&self) -> &'static str {
        if self.present {
            "Present"
        } else {
            "Missing"
        }
    }
}

/// Per-scan outcome: every checklist entry with its observed presence and value.
///
/// Results are kept in checklist order. A report is built fresh for each scan
/// and carries no state from earlier scans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    /// Normalized URL the request was sent to
    pub url: String,
    results: Vec<HeaderCheckResult>,
}

impl ScanReport {
    /// Creates a report with every entry at its seed value.
    pub(crate) fn seeded(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            results: CHECKLIST.iter().map(HeaderCheckResult::seed).collect(),
        }
    }

    /// Records a header found in the response. Names outside the checklist are ignored.
    pub(crate) fn mark_present(&mut self, name: &str, value: String) {
        if let Some(i) = checklist_position(name) {
            let result = &mut self.results[i];
            result.present = true;
            result.value = Some(value);
        }
    }

    /// Results in checklist order.
    pub fn results(&self) -> &[HeaderCheckResult] {
        &self.results
    }

    /// Iterates over results in checklist order.
    pub fn iter(&self) -> impl Iterator<Item = &HeaderCheckResult> {
        self.results.iter()
    }

    /// Looks up the result for a header name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&HeaderCheckResult> {
        checklist_position(name).map(|i| &self.results[i])
    }

    /// Number of checklist headers the response carried.
    pub fn present_count(&self) -> usize {
        self.results.iter().filter(|r| r.present).count()
    }

    /// Names of the checklist headers the response did not carry.
    pub fn missing(&self) -> Vec<&'static str> {
        self.results
            .iter()
            .filter(|r| !r.present)
            .map(|r| r.name)
            .collect()
    }
}

/// Raw response data shown before the checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseSummary {
    /// HTTP status code of the response
    pub status: u16,
    /// Every response header as (name, value), in the order received
    pub headers: Vec<(String, String)>,
}
