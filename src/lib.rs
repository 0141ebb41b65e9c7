//! # GS1 PDS Rust Client
//!
//! A typed async client for the GS1 Product Data Service (PDS) REST API.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`Gs1Config`] and [`Gs1ConfigBuilder`]
//! - Validated newtypes for credentials and the API base URI
//! - An async request pipeline with status classification and rate-limit
//!   tracking ([`HttpClient`])
//! - Typed product operations via [`Gs1Client::products`]
//! - Query filters ([`filters`]) and completion observers ([`RequestObserver`])
//!
//! ## Quick Start
//!
//! ```rust
//! use gs1_pds::{Gs1Config, UserName, UserApiKey, BaseUri};
//!
//! let config = Gs1Config::builder()
//!     .base_uri(BaseUri::new("https://cloud.stg.gs1.org/gs1-pds/api").unwrap())
//!     .user_name(UserName::new("acme").unwrap())
//!     .user_api_key(UserApiKey::new("your-api-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_uri().as_ref(), "https://cloud.stg.gs1.org/gs1-pds/api/");
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use gs1_pds::{Gs1Client, ResourceError};
//!
//! let client = Gs1Client::new(config)?;
//!
//! match client.products().validate_product("00012345678905", "US").await {
//!     Ok(product) => println!("{:?}", product.brand_name),
//!     Err(ResourceError::Rest(e)) if e.status() == Some(429) => {
//!         println!("Slow down: {e}");
//!     }
//!     Err(e) => println!("Request failed: {e}"),
//! }
//!
//! println!("{} requests left", client.rate_limit().remaining);
//! ```
//!
//! ## Authentication
//!
//! Requests use HTTP basic auth with the user name and API key unless an
//! explicit [`Authorization`] is configured, in which case only that header
//! is sent.
//!
//! ## Logging
//!
//! The crate logs through [`tracing`] and never installs a subscriber. Each
//! successful call emits an `info` line with the remaining request count;
//! response headers and bodies are logged at `debug`.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and the configuration validate on construction
//! - **Thread-safe**: All client types are `Send + Sync`
//! - **No hidden retries**: Every failure is returned to the caller

mod client;

pub mod clients;
pub mod config;
pub mod error;
pub mod filters;
pub mod rest;

// Re-export public types at crate root for convenience
pub use client::Gs1Client;
pub use config::{Authorization, BaseUri, Gs1Config, Gs1ConfigBuilder, UserApiKey, UserName};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError, RateLimit, RequestObserver, RestClient, RestError,
};

// Re-export resource types
pub use rest::resources::{NetContent, Product, Status};
pub use rest::{Products, ResourceError, ResourceResponse};
