//! REST-specific error types for the GS1 PDS client.

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for verb-level REST operations.
///
/// # Example
///
/// ```rust
/// use gs1_pds::clients::{HttpError, RestError};
///
/// let error: RestError = HttpError::from_status(404, "Not Found", None).into();
/// assert_eq!(error.status(), Some(404));
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The request body could not be serialized to JSON.
    #[error("Failed to serialize request body: {source}")]
    Serialize {
        /// The underlying serialization error.
        source: serde_json::Error,
    },

    /// The response body could not be decoded into the expected type.
    #[error("Failed to deserialize response body: {source}")]
    Deserialize {
        /// The underlying deserialization error.
        source: serde_json::Error,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl RestError {
    /// Returns the HTTP status code behind this error, if it was classified
    /// from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            Self::Serialize { .. } | Self::Deserialize { .. } => None,
        }
    }
}
