//! REST resource infrastructure for the PDS API.
//!
//! This module provides:
//!
//! - **[`ResourceResponse<T>`]**: A Deref-based wrapper pairing decoded data
//!   with the call's rate-limit snapshot
//! - **Path building**: [`ResourcePath`] tables resolved by [`get_path`] and
//!   interpolated by [`build_path`]
//! - **[`ResourceError`]**: Semantic error types for resource operations
//! - **[`Products`]**: The product operations of the API
//! - **[`resources`]**: The domain types (`Product`, `Status`)
//!
//! # Example
//!
//! ```rust,ignore
//! use gs1_pds::Gs1Client;
//! use gs1_pds::rest::ResourceResponse;
//!
//! let client = Gs1Client::new(config)?;
//!
//! let response = client.products().validate_product("00012345678905", "US").await?;
//! println!("Brand: {:?}", response.brand_name);  // Deref to Product
//! println!("{} requests left", response.rate_limit().remaining);
//! ```

mod errors;
mod path;
mod products;
mod response;

pub mod resources;

// Public exports
pub use errors::ResourceError;
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use products::{Products, PRODUCT_PATHS};
pub use response::ResourceResponse;
