//! The fixed security header checklist.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

use crate::config::*;

/// One row of the checklist: a header to look for and why it matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeaderCheckEntry {
    /// Header name as it is displayed (lookups are case-insensitive)
    pub name: &'static str,
    /// What the header protects against
    pub description: &'static str,
    /// Presence assumed before a response has been inspected
    #[serde(skip)]
    pub default_present: bool,
}

impl HeaderCheckEntry {
    const fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            default_present: false,
        }
    }
}

/// The checklist, in report order.
pub const CHECKLIST: [HeaderCheckEntry; 7] = [
    HeaderCheckEntry::new(HEADER_X_FRAME_OPTIONS, DESC_X_FRAME_OPTIONS),
    HeaderCheckEntry::new(HEADER_X_CONTENT_TYPE_OPTIONS, DESC_X_CONTENT_TYPE_OPTIONS),
    HeaderCheckEntry::new(
        HEADER_STRICT_TRANSPORT_SECURITY,
        DESC_STRICT_TRANSPORT_SECURITY,
    ),
    HeaderCheckEntry::new(HEADER_CONTENT_SECURITY_POLICY, DESC_CONTENT_SECURITY_POLICY),
    HeaderCheckEntry::new(HEADER_REFERRER_POLICY, DESC_REFERRER_POLICY),
    HeaderCheckEntry::new(HEADER_PERMISSIONS_POLICY, DESC_PERMISSIONS_POLICY),
    HeaderCheckEntry::new(HEADER_SERVER, DESC_SERVER),
];

/// Lowercased header name -> position in `CHECKLIST`.
static CHECKLIST_INDEX: LazyLock<HashMap<String, usize>> = LazyLock::new(|| {
    CHECKLIST
        .iter()
        .enumerate()
        .map(|(i, entry)| (entry.name.to_ascii_lowercase(), i))
        .collect()
});

/// Returns the checklist position of a header name, ignoring case.
pub fn checklist_position(name: &str) -> Option<usize> {
    CHECKLIST_INDEX.get(&name.to_ascii_lowercase()).copied()
}
