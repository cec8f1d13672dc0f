//! HTTP transport abstraction.
//!
//! A [`Transport`] performs one GET and hands back the status code and the
//! unread body. [`ReqwestTransport`] is the default, backed by
//! `reqwest::blocking`. Tests and callers with special network needs plug in
//! their own implementation.

use std::io::Read;
use std::sync::Arc;

use reqwest::blocking::Client;
use reqwest::{redirect, Proxy};

use crate::error::{Error, Result, TransportError};
use crate::options::Options;

/// Response returned by a [`Transport`].
///
/// The body is released when this value (or the boxed reader taken out of
/// it) is dropped.
pub struct HttpResponse {
    /// Final HTTP status code after any redirects the transport followed.
    pub status: u16,
    /// Unread response body.
    pub body: Box<dyn Read + Send>,
}

impl HttpResponse {
    /// Build a response from a status code and any readable body.
    pub fn new<R: Read + Send + 'static>(status: u16, body: R) -> Self {
        Self {
            status,
            body: Box::new(body),
        }
    }
}

impl std::fmt::Debug for HttpResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpResponse")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// Capability to perform an HTTP GET.
///
/// Implementations must be safe to share between threads; an
/// [`crate::Extractor`] may be used from several threads at once.
pub trait Transport: Send + Sync {
    /// Issue a GET for `url` and return the status and body.
    ///
    /// # Errors
    ///
    /// Returns an error when no response could be obtained at all (DNS,
    /// connection, TLS, timeout). Non-success statuses are not errors here.
    fn get(&self, url: &str) -> std::result::Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> std::result::Result<HttpResponse, TransportError> {
        (**self).get(url)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn get(&self, url: &str) -> std::result::Result<HttpResponse, TransportError> {
        (**self).get(url)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn get(&self, url: &str) -> std::result::Result<HttpResponse, TransportError> {
        (**self).get(url)
    }
}

/// Default transport backed by a blocking `reqwest` client.
///
/// Requests carry only the client's defaults (`Host`, `Accept: */*`); no
/// user agent or other headers are added. TLS is provided by rustls.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport from [`Options`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Client`] if the proxy URL is invalid or the TLS
    /// backend cannot be initialised.
    pub fn new(options: &Options) -> Result<Self> {
        let policy = if options.max_redirects == 0 {
            redirect::Policy::none()
        } else {
            redirect::Policy::limited(options.max_redirects)
        };

        let mut builder = Client::builder()
            .redirect(policy)
            .timeout(options.timeout);

        if let Some(connect_timeout) = options.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        if let Some(proxy) = &options.proxy {
            builder = builder.proxy(Proxy::all(proxy).map_err(Error::Client)?);
        } else if !options.system_proxy {
            builder = builder.no_proxy();
        }

        let client = builder.build().map_err(Error::Client)?;
        Ok(Self { client })
    }

    /// Wrap an already configured client.
    #[must_use]
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    fn get(&self, url: &str) -> std::result::Result<HttpResponse, TransportError> {
        let response = self.client.get(url).send()?;
        let status = response.status().as_u16();
        Ok(HttpResponse::new(status, response))
    }
}
