//! Types for the resolver module.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while resolving artwork for one artist.
///
/// The first three variants are semantic: the service answered, but the
/// answer is not actionable under the disambiguation policy. The rest are
/// mechanical transport or decoding failures. Either way the failure is
/// scoped to a single artist.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The search returned zero records.
    #[error("No match for '{artist}'")]
    NoMatch { artist: String },

    /// The search returned more than one record.
    #[error("{count} matches for '{artist}'")]
    AmbiguousMatch { artist: String, count: usize },

    /// The single matched record carries no thumbnail URL.
    #[error("No artwork for '{artist}'")]
    NoThumbnail { artist: String },

    /// A request timed out.
    #[error("Request timed out")]
    Timeout,

    /// Could not connect to the service.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The service answered with a non-success status.
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("{0}")]
    ParseError(String),

    /// Any other HTTP-level failure.
    #[error("HTTP error: {0}")]
    Http(String),
}

impl ResolveError {
    /// Whether this is a semantic policy failure rather than a transport
    /// or decoding one. Semantic failures log at warn, mechanical ones at
    /// error.
    pub fn is_semantic(&self) -> bool {
        matches!(
            self,
            Self::NoMatch { .. } | Self::AmbiguousMatch { .. } | Self::NoThumbnail { .. }
        )
    }
}

/// A resolver that turns one artist name into artwork bytes.
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Returns the name of this resolver implementation.
    fn name(&self) -> &str;

    /// Resolves artwork for a single artist: either the raw image bytes or
    /// a classified failure. Performs at most two outbound requests and
    /// never retries.
    async fn resolve(&self, artist: &str) -> Result<Vec<u8>, ResolveError>;
}
