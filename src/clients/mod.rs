//! HTTP client types for PDS API communication.
//!
//! This module provides the request pipeline used by every resource client.
//!
//! # Overview
//!
//! - [`HttpClient`]: Dispatch, authentication, status classification and
//!   rate-limit tracking
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, HEAD, POST, PUT, PATCH, DELETE)
//! - [`RateLimit`]: The `X-Rate-Limit-*` snapshot reported by the API
//! - [`RequestObserver`]: Completion callback for logging or metrics
//! - [`rest::RestClient`]: Verb-level JSON client
//!
//! # Example
//!
//! ```rust,ignore
//! use gs1_pds::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "products")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(&request).await?;
//! client.notify_observers(&request, &response);
//! ```
//!
//! # Failure Behavior
//!
//! Every failure is terminal for the call; nothing is retried. A 429 is
//! surfaced as [`HttpError::ApiLimitReached`] carrying the reset interval, when
//! the API reported one, so callers can back off themselves.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod observer;
pub mod rest;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::HttpClient;
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{
    HttpResponse, RateLimit, RATE_LIMIT_LIMIT_HEADER, RATE_LIMIT_REMAINING_HEADER,
    RATE_LIMIT_RESET_HEADER,
};
pub use observer::RequestObserver;

pub use rest::{RestClient, RestError};
