//! REST client implementation for the PDS API.
//!
//! This module provides the [`RestClient`] type for sending JSON requests
//! with path normalization and filter handling.

use serde::Serialize;

use crate::clients::rest::RestError;
use crate::clients::{
    DataType, HttpClient, HttpMethod, HttpRequest, HttpResponse, RateLimit, RequestObserver,
};
use crate::config::Gs1Config;
use crate::filters::Filter;

/// REST API client for the PDS API.
///
/// Provides one method per HTTP verb. Paths are relative to the configured
/// base URI; leading and trailing slashes are stripped, and an empty path
/// addresses the base URI itself.
///
/// The verb methods return the raw JSON response and notify observers once it
/// has been received. [`request_with`](Self::request_with) runs a decoder
/// first and notifies only when decoding succeeds.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use gs1_pds::clients::RestClient;
///
/// let client = RestClient::new(&config)?;
///
/// // GET request
/// let response = client.get("products", None).await?;
///
/// // POST request with body
/// let body = serde_json::json!({"gtin": "00012345678905", "targetMarket": "US"});
/// let response = client.post("products", &body, None).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the underlying HTTP client cannot be
    /// created.
    pub fn new(config: &Gs1Config) -> Result<Self, RestError> {
        let http_client = HttpClient::new(config)?;
        Ok(Self { http_client })
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns the most recently observed rate-limit snapshot.
    #[must_use]
    pub fn rate_limit(&self) -> RateLimit {
        self.http_client.rate_limit()
    }

    /// Registers an observer notified after every successfully decoded request.
    pub fn add_observer(&mut self, observer: impl RequestObserver + 'static) {
        self.http_client.add_observer(observer);
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - The path relative to the base URI (e.g., "products")
    /// * `filter` - Optional filter appended as query parameters
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] for HTTP-level errors.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let filter = ProductSearchFilter::new(Some("10000045"), None);
    /// let response = client.get("products/search", Some(&filter)).await?;
    /// ```
    pub async fn get(
        &self,
        path: &str,
        filter: Option<&dyn Filter>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None, filter).await
    }

    /// Sends a HEAD request to the specified path.
    ///
    /// The returned response has a `null` body; only its headers matter.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn head(&self, path: &str) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Head, path, None, None).await
    }

    /// Sends a POST request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Serialize`] if `body` cannot be serialized.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let response = client.post("products/delete", &products, None).await?;
    /// ```
    pub async fn post<B>(
        &self,
        path: &str,
        body: &B,
        filter: Option<&dyn Filter>,
    ) -> Result<HttpResponse, RestError>
    where
        B: Serialize + ?Sized,
    {
        let body = to_body(body)?;
        self.make_request(HttpMethod::Post, path, Some(body), filter)
            .await
    }

    /// Sends a PUT request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Serialize`] if `body` cannot be serialized.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn put<B>(
        &self,
        path: &str,
        body: &B,
        filter: Option<&dyn Filter>,
    ) -> Result<HttpResponse, RestError>
    where
        B: Serialize + ?Sized,
    {
        let body = to_body(body)?;
        self.make_request(HttpMethod::Put, path, Some(body), filter)
            .await
    }

    /// Sends a PATCH request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Serialize`] if `body` cannot be serialized.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn patch<B>(
        &self,
        path: &str,
        body: &B,
        filter: Option<&dyn Filter>,
    ) -> Result<HttpResponse, RestError>
    where
        B: Serialize + ?Sized,
    {
        let body = to_body(body)?;
        self.make_request(HttpMethod::Patch, path, Some(body), filter)
            .await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn delete(
        &self,
        path: &str,
        filter: Option<&dyn Filter>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, path, None, filter)
            .await
    }

    /// Sends a request and decodes its response with `decode`.
    ///
    /// Observers are notified only after `decode` succeeds, so a response
    /// that arrives but does not decode is never reported as completed.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's [`RestError`] converted into `E`, or the error
    /// produced by `decode`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let count = client
    ///     .request_with(HttpMethod::Get, "products", None, None, |response| {
    ///         Ok::<_, RestError>(response.body.as_array().map_or(0, Vec::len))
    ///     })
    ///     .await?;
    /// ```
    pub async fn request_with<T, E, F>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        filter: Option<&dyn Filter>,
        decode: F,
    ) -> Result<T, E>
    where
        F: FnOnce(&HttpResponse) -> Result<T, E>,
        E: From<RestError>,
    {
        let request = build_request(method, path, body, filter)?;
        let response = self
            .http_client
            .request(&request)
            .await
            .map_err(RestError::from)?;

        let decoded = decode(&response)?;
        self.http_client.notify_observers(&request, &response);
        Ok(decoded)
    }

    /// Sends a request and returns the raw response.
    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        filter: Option<&dyn Filter>,
    ) -> Result<HttpResponse, RestError> {
        let request = build_request(method, path, body, filter)?;
        let response = self.http_client.request(&request).await?;
        self.http_client.notify_observers(&request, &response);
        Ok(response)
    }
}

fn build_request(
    method: HttpMethod,
    path: &str,
    body: Option<serde_json::Value>,
    filter: Option<&dyn Filter>,
) -> Result<HttpRequest, RestError> {
    let mut builder = HttpRequest::builder(method, normalize_path(path));

    if let Some(body_value) = body {
        builder = builder.body(body_value).body_type(DataType::Json);
    }

    if let Some(filter) = filter {
        builder = builder.filter(filter);
    }

    builder.build().map_err(|e| RestError::Http(e.into()))
}

/// Serializes a request body to JSON.
pub(crate) fn to_body<B: Serialize + ?Sized>(body: &B) -> Result<serde_json::Value, RestError> {
    serde_json::to_value(body).map_err(|source| RestError::Serialize { source })
}

/// Strips leading and trailing `/` characters from a resource path.
fn normalize_path(path: &str) -> String {
    path.trim_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{UserApiKey, UserName};
    use std::collections::HashMap;

    fn create_test_config() -> Gs1Config {
        Gs1Config::builder()
            .user_name(UserName::new("acme").unwrap())
            .user_api_key(UserApiKey::new("secret-key").unwrap())
            .build()
            .unwrap()
    }

    // === Path Normalization Tests ===

    #[test]
    fn test_normalize_path_strips_leading_slash() {
        assert_eq!(normalize_path("/products"), "products");
    }

    #[test]
    fn test_normalize_path_strips_trailing_slash() {
        assert_eq!(normalize_path("products/search/"), "products/search");
    }

    #[test]
    fn test_normalize_path_keeps_nested_segments() {
        assert_eq!(
            normalize_path("//products/00012345678905/US"),
            "products/00012345678905/US"
        );
    }

    #[test]
    fn test_normalize_path_empty_addresses_base() {
        assert_eq!(normalize_path(""), "");
        assert_eq!(normalize_path("///"), "");
    }

    // === Request Building Tests ===

    #[test]
    fn test_build_request_sets_json_body_type() {
        let request = build_request(
            HttpMethod::Post,
            "/products/",
            Some(serde_json::json!([])),
            None,
        )
        .unwrap();

        assert_eq!(request.path, "products");
        assert_eq!(request.body_type, Some(DataType::Json));
    }

    #[test]
    fn test_build_request_rejects_missing_body() {
        let result = build_request(HttpMethod::Put, "products/1/US", None, None);
        assert!(matches!(result, Err(RestError::Http(_))));
    }

    // === Body Serialization Tests ===

    #[test]
    fn test_to_body_serializes_structs() {
        #[derive(Serialize)]
        struct Item {
            gtin: &'static str,
        }

        let body = to_body(&[Item { gtin: "1" }]).unwrap();
        assert_eq!(body, serde_json::json!([{"gtin": "1"}]));
    }

    #[test]
    fn test_to_body_reports_serialization_failure() {
        let mut map = HashMap::new();
        map.insert((1, 2), "tuple keys are not valid JSON object keys");

        assert!(matches!(to_body(&map), Err(RestError::Serialize { .. })));
    }

    // === Construction Tests ===

    #[test]
    fn test_rest_client_new_seeds_rate_limit() {
        let client = RestClient::new(&create_test_config()).unwrap();
        assert_eq!(client.rate_limit(), RateLimit::initial(100));
        assert_eq!(
            client.http_client().base_uri().as_ref(),
            crate::config::BaseUri::DEFAULT
        );
    }

    #[test]
    fn test_rest_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RestClient>();
    }
}
