//! Error types exposed by the article layer.

use thiserror::Error;

/// Errors surfaced while talking to the article service or rendering its data.
///
/// The list view recovers from every variant locally: load failures become an
/// inline placeholder row and delete failures become a user alert.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ArticleError {
    /// The collection request returned a non-success status.
    #[error("Fetch failed with status {status}")]
    FetchFailed {
        /// HTTP status code returned by the service.
        status: u16,
    },

    /// The delete request returned a non-success status.
    #[error("deleting article {id} failed with status {status}")]
    DeleteFailed {
        /// Identifier of the article the request targeted.
        id: String,
        /// HTTP status code returned by the service.
        status: u16,
    },

    /// The requested article does not exist.
    #[error("article {id} was not found")]
    NotFound {
        /// Identifier that was looked up.
        id: String,
    },

    /// Networking failed while calling the article service.
    #[error("network error talking to the article service: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The response body could not be decoded.
    #[error("article payload could not be decoded: {message}")]
    Decode {
        /// Decoder error detail.
        message: String,
    },

    /// The table markup could not be produced or written.
    #[error("article table could not be rendered: {message}")]
    Render {
        /// Template or surface error detail.
        message: String,
    },

    /// A configured or derived URL could not be used.
    #[error("article service URL is invalid: {0}")]
    InvalidUrl(String),

    /// An unsupported command or argument was supplied.
    #[error("unrecognised argument: {argument}")]
    InvalidArgument {
        /// The input the caller does not accept.
        argument: String,
    },

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl ArticleError {
    /// Wraps an I/O failure.
    #[must_use]
    pub fn io(error: &std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}
