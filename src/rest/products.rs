//! Product operations of the PDS API.
//!
//! [`Products`] is a borrowed façade over a [`RestClient`] with one method per
//! product operation. Every method returns a [`ResourceResponse`] carrying
//! that call's rate-limit snapshot.
//!
//! | Method | Request |
//! |---|---|
//! | [`get_all_products`](Products::get_all_products) | `GET products` |
//! | [`search_products`](Products::search_products) | `GET products/search?gpc=&tm=` |
//! | [`query_product_information`](Products::query_product_information) | `GET products/{gtin}/{target_market}` |
//! | [`authenticate_key`](Products::authenticate_key) | `GET products/{gtin}/authenticate` |
//! | [`validate_product`](Products::validate_product) | `GET products/{gtin}/{target_market}` |
//! | [`get_product_timestamp`](Products::get_product_timestamp) | `HEAD products/{gtin}/{target_market}` |
//! | [`create_product`](Products::create_product) | `POST products` |
//! | [`bulk_upload_products`](Products::bulk_upload_products) | `POST products` |
//! | [`modify_product`](Products::modify_product) | `PUT products/{gtin}/{target_market}` |
//! | [`edit_product`](Products::edit_product) | `PATCH products/{gtin}/{target_market}` |
//! | [`delete_product`](Products::delete_product) | `DELETE products/{gtin}/{target_market}` |
//! | [`bulk_delete_products`](Products::bulk_delete_products) | `POST products/delete` |
//!
//! # Example
//!
//! ```rust,ignore
//! let client = Gs1Client::new(config)?;
//! let products = client.products();
//!
//! let found = products.search_products(Some("10000045"), Some("US")).await?;
//! for product in found.iter() {
//!     println!("{} {:?}", product.gtin, product.brand_name);
//! }
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

use crate::clients::rest::to_body;
use crate::clients::{HttpMethod, HttpResponse, RestClient};
use crate::filters::{Filter, ProductSearchFilter};
use crate::rest::resources::{Product, Status};
use crate::rest::{
    build_path, get_path, ResourceError, ResourceOperation, ResourcePath, ResourceResponse,
};

const RESOURCE_NAME: &str = "Product";

const GTIN: &str = "gtin";
const TARGET_MARKET: &str = "target_market";

/// Path table for product operations.
pub const PRODUCT_PATHS: &[ResourcePath] = &[
    ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "products"),
    ResourcePath::new(
        HttpMethod::Get,
        ResourceOperation::Search,
        &[],
        "products/search",
    ),
    ResourcePath::new(
        HttpMethod::Get,
        ResourceOperation::Find,
        &[GTIN, TARGET_MARKET],
        "products/{gtin}/{target_market}",
    ),
    ResourcePath::new(
        HttpMethod::Get,
        ResourceOperation::Authenticate,
        &[GTIN],
        "products/{gtin}/authenticate",
    ),
    ResourcePath::new(
        HttpMethod::Head,
        ResourceOperation::Timestamp,
        &[GTIN, TARGET_MARKET],
        "products/{gtin}/{target_market}",
    ),
    ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "products"),
    ResourcePath::new(
        HttpMethod::Put,
        ResourceOperation::Update,
        &[GTIN, TARGET_MARKET],
        "products/{gtin}/{target_market}",
    ),
    ResourcePath::new(
        HttpMethod::Patch,
        ResourceOperation::Edit,
        &[GTIN, TARGET_MARKET],
        "products/{gtin}/{target_market}",
    ),
    ResourcePath::new(
        HttpMethod::Delete,
        ResourceOperation::Delete,
        &[GTIN, TARGET_MARKET],
        "products/{gtin}/{target_market}",
    ),
    ResourcePath::new(
        HttpMethod::Post,
        ResourceOperation::BulkDelete,
        &[],
        "products/delete",
    ),
];

/// Product operations bound to a client.
///
/// Obtained from [`Gs1Client::products`](crate::Gs1Client::products).
#[derive(Debug, Clone, Copy)]
pub struct Products<'a> {
    client: &'a RestClient,
    allow_deletions: bool,
}

impl<'a> Products<'a> {
    /// Creates a façade over `client`.
    ///
    /// Delete operations are refused unless `allow_deletions` is `true`.
    #[must_use]
    pub const fn new(client: &'a RestClient, allow_deletions: bool) -> Self {
        Self {
            client,
            allow_deletions,
        }
    }

    /// Lists every product visible to the API key.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] for transport, classification and
    /// decoding failures.
    pub async fn get_all_products(&self) -> Result<ResourceResponse<Vec<Product>>, ResourceError> {
        self.fetch(ResourceOperation::All, &[], None, None).await
    }

    /// Searches products by GPC brick code and target market.
    ///
    /// Unset criteria are left out of the query string.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] for transport, classification and
    /// decoding failures.
    pub async fn search_products(
        &self,
        gpc: Option<&str>,
        target_market: Option<&str>,
    ) -> Result<ResourceResponse<Vec<Product>>, ResourceError> {
        let filter = ProductSearchFilter::new(gpc, target_market);
        self.fetch(ResourceOperation::Search, &[], None, Some(&filter))
            .await
    }

    /// Fetches every record for a GTIN in a target market.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidId`] for an unusable id and
    /// [`ResourceError::Rest`] for transport, classification and decoding
    /// failures.
    pub async fn query_product_information(
        &self,
        gtin: &str,
        target_market: &str,
    ) -> Result<ResourceResponse<Vec<Product>>, ResourceError> {
        self.fetch(
            ResourceOperation::Find,
            &[(GTIN, gtin), (TARGET_MARKET, target_market)],
            None,
            None,
        )
        .await
    }

    /// Checks whether the API key may access a GTIN.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidId`] for an unusable id and
    /// [`ResourceError::Rest`] for transport, classification and decoding
    /// failures.
    pub async fn authenticate_key(
        &self,
        gtin: &str,
    ) -> Result<ResourceResponse<Status>, ResourceError> {
        self.fetch(ResourceOperation::Authenticate, &[(GTIN, gtin)], None, None)
            .await
    }

    /// Fetches a single product record.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidId`] for an unusable id and
    /// [`ResourceError::Rest`] for transport, classification and decoding
    /// failures.
    pub async fn validate_product(
        &self,
        gtin: &str,
        target_market: &str,
    ) -> Result<ResourceResponse<Product>, ResourceError> {
        self.fetch(
            ResourceOperation::Find,
            &[(GTIN, gtin), (TARGET_MARKET, target_market)],
            None,
            None,
        )
        .await
    }

    /// Reads a product's last modification time from the `Last-Modified`
    /// header of a HEAD request.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingLastModified`] if the header is absent,
    /// [`ResourceError::InvalidLastModified`] if it is not an HTTP date,
    /// [`ResourceError::InvalidId`] for an unusable id, and
    /// [`ResourceError::Rest`] for transport and classification failures.
    pub async fn get_product_timestamp(
        &self,
        gtin: &str,
        target_market: &str,
    ) -> Result<ResourceResponse<DateTime<Utc>>, ResourceError> {
        self.call(
            ResourceOperation::Timestamp,
            &[(GTIN, gtin), (TARGET_MARKET, target_market)],
            None,
            |response| {
                let rate_limit = response.rate_limit()?;
                let raw = response
                    .last_modified()
                    .ok_or(ResourceError::MissingLastModified)?;
                let timestamp = parse_http_date(raw)?;

                Ok(ResourceResponse::new(
                    timestamp,
                    rate_limit,
                    Some(raw.to_string()),
                ))
            },
        )
        .await
    }

    /// Creates a product and returns the object echoed by the API.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] for serialization, transport,
    /// classification and decoding failures.
    pub async fn create_product(
        &self,
        product: &Product,
    ) -> Result<ResourceResponse<serde_json::Value>, ResourceError> {
        let body = to_body(product)?;
        self.fetch(ResourceOperation::Create, &[], Some(body), None)
            .await
    }

    /// Uploads many products in one request.
    ///
    /// Check [`Status::is_success`] on the result; the API reports partial
    /// failure in the body rather than with a status code.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] for serialization, transport,
    /// classification and decoding failures.
    pub async fn bulk_upload_products(
        &self,
        products: &[Product],
    ) -> Result<ResourceResponse<Status>, ResourceError> {
        let body = to_body(products)?;
        self.fetch(ResourceOperation::Create, &[], Some(body), None)
            .await
    }

    /// Replaces a product record.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidId`] for an unusable id and
    /// [`ResourceError::Rest`] for serialization, transport, classification
    /// and decoding failures.
    pub async fn modify_product(
        &self,
        gtin: &str,
        target_market: &str,
        product: &Product,
    ) -> Result<ResourceResponse<Product>, ResourceError> {
        let body = to_body(product)?;
        self.fetch(
            ResourceOperation::Update,
            &[(GTIN, gtin), (TARGET_MARKET, target_market)],
            Some(body),
            None,
        )
        .await
    }

    /// Partially updates a product record.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidId`] for an unusable id and
    /// [`ResourceError::Rest`] for serialization, transport, classification
    /// and decoding failures.
    pub async fn edit_product(
        &self,
        gtin: &str,
        target_market: &str,
        product: &Product,
    ) -> Result<ResourceResponse<Product>, ResourceError> {
        let body = to_body(product)?;
        self.fetch(
            ResourceOperation::Edit,
            &[(GTIN, gtin), (TARGET_MARKET, target_market)],
            Some(body),
            None,
        )
        .await
    }

    /// Deletes a product record.
    ///
    /// Returns `true` once the API has accepted the deletion; the response
    /// body is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::DeletionsNotAllowed`] without sending a
    /// request unless deletions are enabled, [`ResourceError::InvalidId`] for
    /// an unusable id, and [`ResourceError::Rest`] for transport and
    /// classification failures.
    pub async fn delete_product(
        &self,
        gtin: &str,
        target_market: &str,
    ) -> Result<ResourceResponse<bool>, ResourceError> {
        self.ensure_deletions_allowed(ResourceOperation::Delete)?;

        self.call(
            ResourceOperation::Delete,
            &[(GTIN, gtin), (TARGET_MARKET, target_market)],
            None,
            |response| {
                Ok(ResourceResponse::new(
                    true,
                    response.rate_limit()?,
                    response.last_modified().map(ToString::to_string),
                ))
            },
        )
        .await
    }

    /// Deletes many products in one request, returning one status per item.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::DeletionsNotAllowed`] without sending a
    /// request unless deletions are enabled, and [`ResourceError::Rest`] for
    /// serialization, transport, classification and decoding failures.
    pub async fn bulk_delete_products(
        &self,
        products: &[Product],
    ) -> Result<ResourceResponse<Vec<Status>>, ResourceError> {
        self.ensure_deletions_allowed(ResourceOperation::BulkDelete)?;

        let body = to_body(products)?;
        self.fetch(ResourceOperation::BulkDelete, &[], Some(body), None)
            .await
    }

    /// Sends `operation` and decodes the whole body into `T`.
    async fn fetch<T: DeserializeOwned>(
        &self,
        operation: ResourceOperation,
        ids: &[(&'static str, &str)],
        body: Option<serde_json::Value>,
        filter: Option<&dyn Filter>,
    ) -> Result<ResourceResponse<T>, ResourceError> {
        let (method, path) = resolve(operation, ids)?;
        self.client
            .request_with(method, &path, body, filter, |response| {
                ResourceResponse::from_http_response(response).map_err(ResourceError::from)
            })
            .await
    }

    /// Sends `operation` and builds the result from the response with `decode`.
    async fn call<T, F>(
        &self,
        operation: ResourceOperation,
        ids: &[(&'static str, &str)],
        body: Option<serde_json::Value>,
        decode: F,
    ) -> Result<T, ResourceError>
    where
        F: FnOnce(&HttpResponse) -> Result<T, ResourceError>,
    {
        let (method, path) = resolve(operation, ids)?;
        self.client
            .request_with(method, &path, body, None, decode)
            .await
    }

    fn ensure_deletions_allowed(&self, operation: ResourceOperation) -> Result<(), ResourceError> {
        if self.allow_deletions {
            return Ok(());
        }

        tracing::warn!(
            "Refusing {RESOURCE_NAME}::{}: deletions are not enabled in the configuration",
            operation.as_str()
        );
        Err(ResourceError::DeletionsNotAllowed {
            resource: RESOURCE_NAME,
            operation: operation.as_str(),
        })
    }
}

/// Resolves the method and request path for `operation` from
/// [`PRODUCT_PATHS`].
///
/// Each id must be usable as exactly one path segment. Empty values would
/// collapse the path onto a different endpoint, and `.` or `..` are removed
/// by URL normalization even when percent-encoded.
fn resolve(
    operation: ResourceOperation,
    ids: &[(&'static str, &str)],
) -> Result<(HttpMethod, String), ResourceError> {
    if let Some(&(id, value)) = ids
        .iter()
        .find(|(_, value)| matches!(*value, "" | "." | ".."))
    {
        return Err(ResourceError::InvalidId {
            id,
            value: value.to_string(),
        });
    }

    let available: Vec<&str> = ids.iter().map(|(name, _)| *name).collect();

    let path = get_path(PRODUCT_PATHS, operation, &available).ok_or(
        ResourceError::PathResolutionFailed {
            resource: RESOURCE_NAME,
            operation: operation.as_str(),
        },
    )?;

    let ids: HashMap<&str, &str> = ids.iter().copied().collect();
    Ok((path.http_method, build_path(path.template, &ids)))
}

/// Parses an HTTP date (`Wed, 21 Oct 2015 07:28:00 GMT`) into UTC.
fn parse_http_date(value: &str) -> Result<DateTime<Utc>, ResourceError> {
    DateTime::parse_from_rfc2822(value)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|_| ResourceError::InvalidLastModified {
            value: value.to_string(),
        })
}
