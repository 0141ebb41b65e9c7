//! Response wrapper for REST resource operations.
//!
//! This module provides [`ResourceResponse<T>`], a wrapper that combines
//! decoded resource data with the rate-limit snapshot of the call that
//! produced it. The wrapper implements `Deref` for ergonomic access to the
//! inner data.
//!
//! # Deref Pattern
//!
//! ```rust,ignore
//! let response: ResourceResponse<Vec<Product>> = client.products().get_all_products().await?;
//!
//! // Iterate directly (Vec method via Deref)
//! for product in response.iter() {
//!     println!("{}", product.gtin);
//! }
//!
//! // This call's own snapshot, unaffected by concurrent calls
//! println!("{} requests left", response.rate_limit().remaining);
//!
//! // Take ownership of inner data
//! let products: Vec<Product> = response.into_inner();
//! ```

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::clients::{HttpResponse, RateLimit, RestError};

/// A response from a REST resource operation.
///
/// # Type Parameters
///
/// * `T` - The decoded data. For single resources this is the resource type
///   (e.g., `Product`); for collections it is `Vec<Product>`.
///
/// # Example
///
/// ```rust
/// use gs1_pds::rest::ResourceResponse;
/// use gs1_pds::clients::RateLimit;
///
/// let response = ResourceResponse::new(
///     vec!["item1", "item2", "item3"],
///     RateLimit { remaining: 42, reset_seconds: 7, limit: 100 },
///     None,
/// );
///
/// assert_eq!(response.len(), 3);
/// assert_eq!(response[0], "item1");
/// assert_eq!(response.rate_limit().remaining, 42);
/// ```
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    /// The resource data.
    data: T,
    /// Rate-limit snapshot of this call.
    rate_limit: RateLimit,
    /// Raw `Last-Modified` header value.
    last_modified: Option<String>,
}

impl<T> ResourceResponse<T> {
    /// Creates a new `ResourceResponse` with the given data and metadata.
    #[must_use]
    pub const fn new(data: T, rate_limit: RateLimit, last_modified: Option<String>) -> Self {
        Self {
            data,
            rate_limit,
            last_modified,
        }
    }

    /// Consumes the response and returns the inner data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns a reference to the inner data.
    ///
    /// Note: In most cases, you can use Deref coercion instead of
    /// calling this method explicitly.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns a mutable reference to the inner data.
    #[must_use]
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Returns the rate-limit snapshot reported with this response.
    #[must_use]
    pub const fn rate_limit(&self) -> RateLimit {
        self.rate_limit
    }

    /// Returns the raw `Last-Modified` header value, if the API sent one.
    #[must_use]
    pub fn last_modified(&self) -> Option<&str> {
        self.last_modified.as_deref()
    }

    /// Maps the inner data to a new type.
    ///
    /// Useful for transforming the response data while preserving metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            rate_limit: self.rate_limit,
            last_modified: self.last_modified,
        }
    }
}

impl<T: DeserializeOwned> ResourceResponse<T> {
    /// Creates a `ResourceResponse` by decoding the whole body of an HTTP
    /// response.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the rate-limit headers are missing and
    /// [`RestError::Deserialize`] if the body does not decode into `T`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// // Assuming response.body = [{"gtin": "00012345678905", "targetMarket": "US"}]
    /// let products: ResourceResponse<Vec<Product>> =
    ///     ResourceResponse::from_http_response(&http_response)?;
    /// ```
    pub fn from_http_response(response: &HttpResponse) -> Result<Self, RestError> {
        let rate_limit = response.rate_limit()?;
        let last_modified = response.last_modified().map(ToString::to_string);

        let data =
            T::deserialize(&response.body).map_err(|source| RestError::Deserialize { source })?;

        Ok(Self {
            data,
            rate_limit,
            last_modified,
        })
    }
}

/// Provides transparent access to the inner data.
impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

/// Provides mutable access to the inner data.
impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

// Verify ResourceResponse is Send + Sync when T is Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceResponse<String>>();
    assert_send_sync::<ResourceResponse<Vec<String>>>();
};
