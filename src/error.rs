//! Error types for rs-metatags.
//!
//! This module defines the error types returned by fetch and extraction operations.

/// Boxed error produced by a [`crate::Transport`] implementation.
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error type for fetch and extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// URL does not start with `http://` or `https://`. No request was made.
    #[error("invalid URL scheme: {0}")]
    InvalidUrl(String),

    /// The transport failed to reach or read from the server.
    #[error("failed to fetch {url}: {source}")]
    FetchFailed {
        url: String,
        #[source]
        source: TransportError,
    },

    /// The server answered with something other than `200 OK`.
    #[error("unexpected status code {status} for {url}")]
    UnexpectedStatus { url: String, status: u16 },

    /// The byte stream could not be read into a document.
    #[error("failed to parse HTML: {0}")]
    ParseFailed(#[source] std::io::Error),

    /// The default HTTP client could not be built from the given options.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl Error {
    /// HTTP status code carried by [`Error::UnexpectedStatus`].
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for fetch and extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
