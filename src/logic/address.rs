use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Permissive shape check: optional scheme, dotted hostname, optional
/// port, optional path.
static ADDRESS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i:https?://)?[a-zA-Z0-9-]+(\.[a-zA-Z0-9-]+)*(:\d+)?(/.*)?$")
        .expect("address pattern is valid")
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("address is empty")]
    Empty,
    #[error("address {0:?} is not a valid device URL")]
    Invalid(String),
}

/// Normalizes raw user input into a device base URL.
///
/// The scheme defaults to plain `http://` when missing, trailing slashes
/// are stripped, and the result must match the permissive
/// hostname/port/path pattern. Rejection leaves no trace; callers append
/// the returned address to the device list only on `Ok`.
pub fn normalize_address(raw: &str) -> Result<String, AddressError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AddressError::Empty);
    }

    let mut address = if has_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };

    while address.ends_with('/') {
        address.pop();
    }

    if !ADDRESS_PATTERN.is_match(&address) {
        return Err(AddressError::Invalid(trimmed.to_string()));
    }

    Ok(address)
}

fn has_scheme(address: &str) -> bool {
    let lower = address.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
#[path = "address_tests.rs"]
mod tests;
