//! # rs-metatags
//!
//! Fetch a web page and extract its `<meta>` tags as name/content pairs.
//!
//! A page is retrieved with a single GET through a pluggable [`Transport`],
//! parsed by `dom_query` (html5ever), and walked in document order. Every
//! `<meta>` element that has a `name` or `property` attribute and a
//! `content` attribute, both non-empty, becomes one [`MetaTag`].
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_metatags::extract_meta_tags_from_str;
//!
//! let html = r#"<html><head>
//! <meta name="description" content="A test page">
//! <meta property="og:title" content="Test">
//! <meta charset="utf-8">
//! </head></html>"#;
//!
//! let tags = extract_meta_tags_from_str(html);
//! assert_eq!(tags.len(), 2);
//! assert_eq!(tags[0].as_pair(), ("description", "A test page"));
//! assert_eq!(tags[1].as_pair(), ("og:title", "Test"));
//! ```
//!
//! Fetching over the network goes through an [`Extractor`]:
//!
//! ```rust,no_run
//! use rs_metatags::Extractor;
//!
//! let extractor = Extractor::new(None)?;
//! for tag in extractor.extract("https://example.com")? {
//!     println!("{}: {}", tag.name(), tag.content());
//! }
//! # Ok::<(), rs_metatags::Error>(())
//! ```

mod error;
mod options;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Meta tag extraction from parsed documents and byte streams.
pub mod meta_tags;

/// Page retrieval with scheme and status validation.
pub mod fetcher;

/// HTTP transport trait and the default `reqwest` implementation.
pub mod transport;

use std::io::Read;

use tracing::{debug, instrument};

// Public API - re-exports
pub use error::{Error, Result, TransportError};
pub use fetcher::fetch;
pub use meta_tags::{extract_meta_tags, extract_meta_tags_from_str};
pub use options::Options;
pub use result::MetaTag;
pub use transport::{HttpResponse, ReqwestTransport, Transport};

/// Fetches pages and extracts their meta tags.
///
/// Holds nothing but the transport, so one instance can serve any number of
/// calls, including from several threads at once.
pub struct Extractor {
    transport: Box<dyn Transport>,
}

impl std::fmt::Debug for Extractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extractor").finish_non_exhaustive()
    }
}

impl Extractor {
    /// Create an extractor using `transport`, or the default
    /// [`ReqwestTransport`] when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Client`] if the default transport cannot be built.
    pub fn new(transport: Option<Box<dyn Transport>>) -> Result<Self> {
        match transport {
            Some(transport) => Ok(Self { transport }),
            None => Self::with_options(&Options::default()),
        }
    }

    /// Create an extractor whose default transport is configured by `options`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Client`] if the options describe an unusable client,
    /// such as an invalid proxy URL.
    pub fn with_options(options: &Options) -> Result<Self> {
        let transport = ReqwestTransport::new(options)?;
        Ok(Self::with_transport(transport))
    }

    /// Create an extractor around a specific transport.
    #[must_use]
    pub fn with_transport<T: Transport + 'static>(transport: T) -> Self {
        Self {
            transport: Box::new(transport),
        }
    }

    /// Fetch `url` and extract its meta tags in document order.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidUrl`] if `url` does not start with `http://` or `https://`
    /// - [`Error::FetchFailed`] on network or transport failure
    /// - [`Error::UnexpectedStatus`] if the server does not answer 200
    /// - [`Error::ParseFailed`] if the body cannot be read
    #[instrument(skip(self), level = "debug")]
    pub fn extract(&self, url: &str) -> Result<Vec<MetaTag>> {
        let body = fetch(&self.transport, url)?;
        let tags = self.extract_from_reader(body)?;
        debug!(count = tags.len(), "extracted meta tags");
        Ok(tags)
    }

    /// Extract meta tags from an HTML byte stream without any network I/O.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseFailed`] if reading the stream fails.
    #[allow(clippy::unused_self)]
    pub fn extract_from_reader<R: Read>(&self, reader: R) -> Result<Vec<MetaTag>> {
        extract_meta_tags(reader)
    }
}
