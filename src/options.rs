//! Configuration options for the default HTTP transport.
//!
//! The `Options` struct controls how [`crate::ReqwestTransport`] talks to the
//! network. Custom transports ignore it entirely.

use std::time::Duration;

/// Default total request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default number of redirects followed by the transport.
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Configuration options for the default transport.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_metatags::Options;
/// use std::time::Duration;
///
/// let options = Options {
///     timeout: Some(Duration::from_secs(5)),
///     proxy: Some("http://127.0.0.1:3128".to_string()),
///     ..Options::default()
/// };
/// assert_eq!(options.max_redirects, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Total time allowed for one request, body included.
    ///
    /// `None` disables the timeout.
    ///
    /// Default: 30 seconds
    pub timeout: Option<Duration>,

    /// Time allowed to establish the connection.
    ///
    /// Default: `None`
    pub connect_timeout: Option<Duration>,

    /// Proxy URL used for every scheme.
    ///
    /// Default: `None`
    pub proxy: Option<String>,

    /// Honor `HTTP_PROXY` / `HTTPS_PROXY` / `NO_PROXY` from the environment
    /// when no explicit `proxy` is set.
    ///
    /// Default: `true`
    pub system_proxy: bool,

    /// Maximum number of redirects followed for one request.
    ///
    /// Going past the limit is a fetch failure. `0` disables redirects, so a
    /// `3xx` answer surfaces as an unexpected status.
    ///
    /// Default: `10`
    pub max_redirects: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout: Some(DEFAULT_TIMEOUT),
            connect_timeout: None,
            proxy: None,
            system_proxy: true,
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}
