//! URL validation and normalization utilities.

use log::debug;

use crate::config::{DEFAULT_SCHEME, MAX_URL_LENGTH};
use crate::error_handling::ScanError;

/// Validates and normalizes a scan target.
///
/// Adds the `http://` prefix if the input carries no scheme, then validates
/// that the URL is syntactically valid and uses the http/https scheme. The
/// returned string is exactly what gets dispatched: no trailing slash or other
/// canonicalization is applied.
///
/// # Arguments
///
/// * `input` - The target as typed by the user
///
/// # Errors
///
/// Returns `ScanError::InvalidUrl` if the input is empty, too long, does not
/// parse, or uses a scheme other than http/https.
pub fn normalize_target_url(input: &str) -> Result<String, ScanError> {
    let input = input.trim();
    let invalid = |reason: String| ScanError::InvalidUrl {
        input: input.to_string(),
        reason,
    };

    if input.is_empty() {
        return Err(invalid("empty URL".to_string()));
    }

    let normalized = if has_scheme(input) {
        input.to_string()
    } else {
        format!("{DEFAULT_SCHEME}{input}")
    };

    if normalized.len() > MAX_URL_LENGTH {
        return Err(invalid(format!(
            "exceeds maximum length ({} > {})",
            normalized.len(),
            MAX_URL_LENGTH
        )));
    }

    let parsed = url::Url::parse(&normalized).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => {
            if normalized != input {
                debug!("Added missing scheme: {input} -> {normalized}");
            }
            Ok(normalized)
        }
        other => Err(invalid(format!("unsupported scheme '{other}'"))),
    }
}

/// True when the input starts with `scheme://`.
///
/// A `://` further along (e.g. inside a query string) does not count: the
/// part before it must be a valid scheme name (a letter, then letters, digits,
/// `+`, `-` or `.`).
fn has_scheme(input: &str) -> bool {
    let Some((scheme, _)) = input.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
