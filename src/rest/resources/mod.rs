//! Domain types exchanged with the PDS API.
//!
//! - [`Product`]: A product record keyed by GTIN and target market
//! - [`NetContent`]: A labelled quantity on a product
//! - [`Status`]: The outcome of a key check or bulk operation item

mod product;
mod status;

pub use product::{NetContent, Product};
pub use status::Status;
