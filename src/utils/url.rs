//! Outbound link URL checks.
//!
//! Link URLs come from the embedded site config and are validated once at
//! load time, so a typo in `site.toml` shows up as a config error instead of
//! a dead link.

use thiserror::Error;

/// Scheme of a validated outbound link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkScheme {
    Http,
    Https,
    Mailto,
}

/// Errors that can occur during URL validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlValidationError {
    #[error("URL is empty")]
    Empty,
    #[error("URL must start with http://, https:// or mailto:")]
    InvalidProtocol,
    #[error("URL has no host")]
    NoHost,
    #[error("mailto: URI has no address")]
    NoAddress,
}

/// Validate an outbound link URL.
///
/// Accepts absolute `http(s)` URLs with a host and `mailto:` URIs with an
/// address. Everything else (relative paths, `javascript:`, `ftp:`) is
/// rejected.
pub fn validate_link_url(url: &str) -> Result<LinkScheme, UrlValidationError> {
    let url = url.trim();

    if url.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let url_lower = url.to_lowercase();

    if let Some(rest) = url_lower.strip_prefix("mailto:") {
        let address = rest.split('?').next().unwrap_or_default();
        if address.is_empty() || !address.contains('@') {
            return Err(UrlValidationError::NoAddress);
        }
        return Ok(LinkScheme::Mailto);
    }

    let scheme = if url_lower.starts_with("https://") {
        LinkScheme::Https
    } else if url_lower.starts_with("http://") {
        LinkScheme::Http
    } else {
        return Err(UrlValidationError::InvalidProtocol);
    };

    if extract_host(url).is_none() {
        return Err(UrlValidationError::NoHost);
    }

    Ok(scheme)
}

/// Extract host from a URL
pub fn extract_host(url: &str) -> Option<String> {
    let lower = url.trim().to_lowercase();
    let without_protocol = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))?;

    // Get the host part (before first /, ? or # or end of string)
    let host_part = without_protocol.split(['/', '?', '#']).next()?;

    // Strip userinfo and port
    let host_part = host_part.rsplit('@').next()?;
    let host = host_part.split(':').next()?;

    let host = host.strip_prefix("www.").unwrap_or(host);

    if host.is_empty() {
        return None;
    }

    Some(host.to_string())
}
