//! Base-domain validation utilities

use regex::Regex;
use std::sync::OnceLock;

use crate::error::{Result, SubforgeError};

/// Maximum accepted base-domain length in symbols.
pub const MAX_BASE_DOMAIN_LEN: usize = 128;

fn charset_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z0-9.-]+$").expect("charset regex is valid"))
}

/// Validate and normalize the user-supplied base domain.
///
/// The enumerator assumes a pre-validated domain; this is the layer that owns
/// the checks. Accepts 1..=128 symbols from `[a-z0-9.-]` (input is lowercased
/// first), with the usual label rules.
pub fn validate_base_domain(domain: &str) -> Result<String> {
    let domain = domain.trim().to_lowercase();

    if domain.is_empty() {
        return Err(SubforgeError::validation("base domain cannot be empty"));
    }

    if domain.len() > MAX_BASE_DOMAIN_LEN {
        return Err(SubforgeError::validation(format!(
            "base domain too long (max {} characters)",
            MAX_BASE_DOMAIN_LEN
        )));
    }

    if !charset_regex().is_match(&domain) {
        return Err(SubforgeError::validation(
            "base domain contains invalid characters",
        ));
    }

    if domain.starts_with('.') || domain.ends_with('.') {
        return Err(SubforgeError::validation(
            "base domain cannot start or end with dot",
        ));
    }

    if domain.contains("..") {
        return Err(SubforgeError::validation(
            "base domain cannot contain consecutive dots",
        ));
    }

    for label in domain.split('.') {
        if label.len() > 63 {
            return Err(SubforgeError::validation(
                "base domain label too long (max 63 characters)",
            ));
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(SubforgeError::validation(
                "base domain label cannot start or end with hyphen",
            ));
        }
    }

    Ok(domain)
}
