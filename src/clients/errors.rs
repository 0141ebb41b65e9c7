//! HTTP-specific error types for the GS1 PDS client.
//!
//! Non-success responses are classified by status code into the variants of
//! [`HttpError`]. Every classified variant carries the response's reason
//! phrase so callers can surface it without holding on to the response.
//!
//! | Status | Variant |
//! |---|---|
//! | 400 | [`HttpError::BadRequest`] |
//! | 401 | [`HttpError::NotAuthorized`] |
//! | 404 | [`HttpError::NotFound`] |
//! | 405 | [`HttpError::MethodNotAllowed`] |
//! | 429 | [`HttpError::ApiLimitReached`] |
//! | 500 | [`HttpError::InternalServerError`] |
//! | other | [`HttpError::Unhandled`] |
//!
//! # Example
//!
//! ```rust,ignore
//! match client.request(&request).await {
//!     Ok(response) => println!("{} requests left", client.rate_limit().remaining),
//!     Err(HttpError::ApiLimitReached { reset_seconds: Some(seconds), .. }) => {
//!         println!("Try again in {seconds}s");
//!     }
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::http_response::RateLimit;

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A method that requires a body was used without one.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A method that never carries a body was given one.
    #[error("Cannot send a body with {method}.")]
    UnexpectedBody {
        /// The HTTP method that was given a body.
        method: String,
    },
}

/// Unified error type for the request pipeline.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The API rejected the request as malformed (HTTP 400).
    #[error("Bad request: {reason}")]
    BadRequest {
        /// The response reason phrase.
        reason: String,
    },

    /// The credentials were rejected (HTTP 401).
    #[error("Not authorized: {reason}")]
    NotAuthorized {
        /// The response reason phrase.
        reason: String,
    },

    /// The resource does not exist (HTTP 404).
    #[error("Not found: {reason}")]
    NotFound {
        /// The response reason phrase.
        reason: String,
    },

    /// The verb is not supported on this resource (HTTP 405).
    #[error("Method not allowed: {reason}")]
    MethodNotAllowed {
        /// The response reason phrase.
        reason: String,
    },

    /// The API key has exhausted its quota (HTTP 429).
    ///
    /// `remaining` and `reset_seconds` are `None` when the response did not
    /// carry usable rate-limit headers.
    #[error("{reason}\n{}", reset_hint(.reset_seconds))]
    ApiLimitReached {
        /// The response reason phrase.
        reason: String,
        /// Requests remaining in the current window.
        remaining: Option<u32>,
        /// Seconds until the window resets.
        reset_seconds: Option<u32>,
    },

    /// The API failed internally (HTTP 500).
    #[error("Internal server error: {reason}")]
    InternalServerError {
        /// The response reason phrase.
        reason: String,
    },

    /// Any other non-success status.
    #[error("This error is not handled ({code})\n{reason}")]
    Unhandled {
        /// The HTTP status code.
        code: u16,
        /// The response reason phrase.
        reason: String,
    },

    /// A required rate-limit header was absent or not an integer.
    #[error("Response is missing a valid '{header}' header")]
    MissingRateLimitHeader {
        /// The header that could not be read.
        header: &'static str,
    },

    /// A successful response carried a body that is not valid JSON.
    #[error("Response body is not valid JSON: {source}")]
    InvalidBody {
        /// The underlying parse error.
        source: serde_json::Error,
    },

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Classifies a non-success status code.
    ///
    /// `rate_limit` fills in the counters of [`HttpError::ApiLimitReached`];
    /// it is ignored for every other status.
    #[must_use]
    pub fn from_status(
        code: u16,
        reason: impl Into<String>,
        rate_limit: Option<RateLimit>,
    ) -> Self {
        let reason = reason.into();
        match code {
            400 => Self::BadRequest { reason },
            401 => Self::NotAuthorized { reason },
            404 => Self::NotFound { reason },
            405 => Self::MethodNotAllowed { reason },
            429 => Self::ApiLimitReached {
                reason,
                remaining: rate_limit.map(|rl| rl.remaining),
                reset_seconds: rate_limit.map(|rl| rl.reset_seconds),
            },
            500 => Self::InternalServerError { reason },
            _ => Self::Unhandled { code, reason },
        }
    }

    /// Returns the HTTP status code this error was classified from, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::BadRequest { .. } => Some(400),
            Self::NotAuthorized { .. } => Some(401),
            Self::NotFound { .. } => Some(404),
            Self::MethodNotAllowed { .. } => Some(405),
            Self::ApiLimitReached { .. } => Some(429),
            Self::InternalServerError { .. } => Some(500),
            Self::Unhandled { code, .. } => Some(*code),
            Self::MissingRateLimitHeader { .. }
            | Self::InvalidBody { .. }
            | Self::InvalidRequest(_)
            | Self::Network(_) => None,
        }
    }
}

fn reset_hint(reset_seconds: &Option<u32>) -> String {
    reset_seconds.map_or_else(
        || "The API did not report when requests reset.".to_string(),
        |seconds| format!("There are {seconds} seconds remaining until a request reset."),
    )
}
