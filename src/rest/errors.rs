//! Resource-specific error types for REST API operations.
//!
//! This module contains [`ResourceError`], which extends
//! [`RestError`](crate::clients::RestError) with failures that only make
//! sense at the resource level.
//!
//! # Example
//!
//! ```rust,ignore
//! use gs1_pds::clients::HttpError;
//! use gs1_pds::rest::ResourceError;
//!
//! match client.products().validate_product("00012345678905", "US").await {
//!     Ok(product) => println!("Found: {:?}", product.brand_name),
//!     Err(e) if e.http_status() == Some(404) => println!("No such product"),
//!     Err(ResourceError::DeletionsNotAllowed { .. }) => unreachable!(),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use crate::clients::{HttpError, RestError};
use thiserror::Error;

/// Error type for REST resource operations.
///
/// # Example
///
/// ```rust
/// use gs1_pds::rest::ResourceError;
///
/// let error = ResourceError::DeletionsNotAllowed {
///     resource: "Product",
///     operation: "delete",
/// };
/// assert!(error.to_string().contains("allow_deletions"));
/// assert_eq!(error.http_status(), None);
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A delete operation was attempted while the configuration does not
    /// allow deletions. No request was sent.
    #[error("{resource}::{operation} refused: allow_deletions is not enabled")]
    DeletionsNotAllowed {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation that was refused.
        operation: &'static str,
    },

    /// A timestamp request succeeded but carried no `Last-Modified` header.
    #[error("Response is missing the 'Last-Modified' header")]
    MissingLastModified,

    /// The `Last-Modified` header could not be parsed as an HTTP date.
    #[error("Invalid 'Last-Modified' header: '{value}'")]
    InvalidLastModified {
        /// The raw header value.
        value: String,
    },

    /// No path is declared for the operation with the provided ids.
    #[error("Cannot resolve path for {resource}::{operation} with provided IDs")]
    PathResolutionFailed {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted.
        operation: &'static str,
    },

    /// An id cannot be used as a path segment: it is empty, `.` or `..`.
    /// No request was sent.
    #[error("Invalid {id} '{value}': must be a non-empty path segment other than '.' or '..'")]
    InvalidId {
        /// The name of the id.
        id: &'static str,
        /// The rejected value.
        value: String,
    },

    /// A REST-level error occurred.
    #[error(transparent)]
    Rest(#[from] RestError),
}

impl From<HttpError> for ResourceError {
    fn from(error: HttpError) -> Self {
        Self::Rest(RestError::Http(error))
    }
}

impl ResourceError {
    /// Returns the HTTP status code if this error was classified from a
    /// non-success response.
    #[must_use]
    pub const fn http_status(&self) -> Option<u16> {
        match self {
            Self::Rest(e) => e.status(),
            Self::DeletionsNotAllowed { .. }
            | Self::MissingLastModified
            | Self::InvalidLastModified { .. }
            | Self::PathResolutionFailed { .. }
            | Self::InvalidId { .. } => None,
        }
    }

    /// Returns the underlying [`HttpError`], if any.
    #[must_use]
    pub const fn as_http_error(&self) -> Option<&HttpError> {
        match self {
            Self::Rest(RestError::Http(e)) => Some(e),
            _ => None,
        }
    }
}

// Verify ResourceError is Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
