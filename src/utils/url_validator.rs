//! Validation of submitted long URLs.
//!
//! URLs are checked, not rewritten: the stored value is the trimmed submission,
//! so a lookup returns exactly what was shortened.

use url::Url;

/// Longest accepted long URL, matching the storage column width.
pub const MAX_URL_LENGTH: usize = 200;

/// Reasons a long URL is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("URL must be at most {MAX_URL_LENGTH} characters, got {0}")]
    TooLong(usize),

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Validates a long URL and returns the trimmed form that should be stored.
///
/// # Rules
///
/// 1. Surrounding whitespace is ignored; the rest must be non-empty
/// 2. At most [`MAX_URL_LENGTH`] characters
/// 3. Must parse as an absolute URL
/// 4. Scheme must be `http` or `https`
/// 5. Must have a host
///
/// # Examples
///
/// ```ignore
/// assert_eq!(validate_url(" https://www.wp.pl/ ").unwrap(), "https://www.wp.pl/");
/// assert!(validate_url("INVALID-URL").is_err());
/// assert!(validate_url("javascript:alert(1)").is_err());
/// ```
pub fn validate_url(input: &str) -> Result<&str, UrlValidationError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let length = trimmed.chars().count();
    if length > MAX_URL_LENGTH {
        return Err(UrlValidationError::TooLong(length));
    }

    let url = Url::parse(trimmed).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(trimmed),
        _ => Err(UrlValidationError::MissingHost),
    }
}
