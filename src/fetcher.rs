//! Page retrieval: scheme check, one GET, status check.

use std::io::Read;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::transport::Transport;

const HTTP_PREFIX: &str = "http://";
const HTTPS_PREFIX: &str = "https://";

const STATUS_OK: u16 = 200;

/// Check that a URL carries an `http://` or `https://` prefix.
///
/// The comparison is case-sensitive and purely textual.
#[must_use]
pub fn has_http_scheme(url: &str) -> bool {
    url.starts_with(HTTP_PREFIX) || url.starts_with(HTTPS_PREFIX)
}

/// Fetch `url` through `transport` and return the unread body.
///
/// Exactly one request is made, and only after the scheme check passes. On
/// a non-200 status the body is dropped without being read.
///
/// # Errors
///
/// - [`Error::InvalidUrl`] if the scheme check fails
/// - [`Error::FetchFailed`] if the transport cannot produce a response
/// - [`Error::UnexpectedStatus`] if the status is anything but 200
pub fn fetch<T: Transport + ?Sized>(transport: &T, url: &str) -> Result<Box<dyn Read + Send>> {
    if !has_http_scheme(url) {
        return Err(Error::InvalidUrl(url.to_string()));
    }

    debug!(url, "fetching page");
    let response = transport.get(url).map_err(|source| {
        warn!(url, error = %source, "fetch failed");
        Error::FetchFailed {
            url: url.to_string(),
            source,
        }
    })?;

    if response.status != STATUS_OK {
        warn!(url, status = response.status, "unexpected status");
        return Err(Error::UnexpectedStatus {
            url: url.to_string(),
            status: response.status,
        });
    }

    Ok(response.body)
}
