//! Verb-level JSON client for the PDS API.
//!
//! [`RestClient`] wraps the [`HttpClient`](crate::clients::HttpClient) with
//! one method per HTTP verb. Bodies are serialized to JSON, filters become
//! query parameters, and the raw [`HttpResponse`](crate::clients::HttpResponse)
//! is handed to a decoder before observers hear about the call.
//!
//! # Example
//!
//! ```rust,ignore
//! use gs1_pds::clients::rest::RestClient;
//! use gs1_pds::filters::ProductSearchFilter;
//!
//! let client = RestClient::new(&config)?;
//!
//! let filter = ProductSearchFilter::new(Some("10000045"), Some("US"));
//! let response = client.get("products/search", Some(&filter)).await?;
//! println!("{}", response.body);
//! ```

mod client;
mod errors;

pub(crate) use client::to_body;
pub use client::RestClient;
pub use errors::RestError;
