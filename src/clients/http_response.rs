//! HTTP response types for the GS1 PDS client.
//!
//! This module provides the [`HttpResponse`] type and the [`RateLimit`]
//! snapshot parsed from the `X-Rate-Limit-*` headers the API sends with
//! every response.

use std::collections::HashMap;

use crate::clients::errors::HttpError;

/// Header carrying the number of requests left in the current window.
pub const RATE_LIMIT_REMAINING_HEADER: &str = "X-Rate-Limit-Remaining";
/// Header carrying the seconds until the window resets.
pub const RATE_LIMIT_RESET_HEADER: &str = "X-Rate-Limit-Reset";
/// Header carrying the total requests allowed per window.
pub const RATE_LIMIT_LIMIT_HEADER: &str = "X-Rate-Limit-Limit";

/// Rate-limit state reported by the API.
///
/// # Example
///
/// ```rust
/// use gs1_pds::clients::RateLimit;
///
/// let limit = RateLimit { remaining: 5, reset_seconds: 12, limit: 100 };
/// assert!(!limit.is_exhausted());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests remaining in the current window.
    pub remaining: u32,
    /// Seconds until the window resets.
    pub reset_seconds: u32,
    /// Total requests allowed per window.
    pub limit: u32,
}

impl RateLimit {
    /// The snapshot a client starts with before it has seen a response.
    #[must_use]
    pub const fn initial(api_limit: u32) -> Self {
        Self {
            remaining: api_limit,
            reset_seconds: 30,
            limit: api_limit,
        }
    }

    /// Parses the three rate-limit headers.
    ///
    /// Header names are matched case-insensitively against the lower-cased
    /// map produced by the client.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::MissingRateLimitHeader`] naming the first header
    /// that is absent or not a non-negative integer.
    pub fn from_headers(headers: &HashMap<String, Vec<String>>) -> Result<Self, HttpError> {
        Ok(Self {
            remaining: parse_header(headers, RATE_LIMIT_REMAINING_HEADER)?,
            reset_seconds: parse_header(headers, RATE_LIMIT_RESET_HEADER)?,
            limit: parse_header(headers, RATE_LIMIT_LIMIT_HEADER)?,
        })
    }

    /// Returns `true` if no requests remain in the current window.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

fn parse_header(
    headers: &HashMap<String, Vec<String>>,
    header: &'static str,
) -> Result<u32, HttpError> {
    headers
        .get(&header.to_lowercase())
        .and_then(|values| values.first())
        .and_then(|value| value.trim().parse().ok())
        .ok_or(HttpError::MissingRateLimitHeader { header })
}

/// An HTTP response from the PDS API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The reason phrase for the status code.
    pub reason: String,
    /// Response headers, keyed by lower-cased name.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body; `null` when the body is empty.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    ///
    /// Header names are lower-cased so lookups are case-insensitive.
    #[must_use]
    pub fn new(
        code: u16,
        reason: impl Into<String>,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        let headers = headers
            .into_iter()
            .map(|(name, values)| (name.to_lowercase(), values))
            .collect();

        Self {
            code,
            reason: reason.into(),
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of `name`, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `Last-Modified` header value, if present.
    #[must_use]
    pub fn last_modified(&self) -> Option<&str> {
        self.header("last-modified")
    }

    /// Parses the rate-limit headers of this response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::MissingRateLimitHeader`] if any of the three
    /// headers is absent or malformed.
    pub fn rate_limit(&self) -> Result<RateLimit, HttpError> {
        RateLimit::from_headers(&self.headers)
    }
}
