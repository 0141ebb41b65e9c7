//! HTTP request types for the GS1 PDS client.
//!
//! This module provides the [`HttpRequest`] type and its builder. A request
//! keeps its resource path and its query parameters apart; the two are only
//! combined when the final URL is produced by [`HttpRequest::url`].

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;
use crate::config::BaseUri;
use crate::filters::{encode_filter, Filter};

/// HTTP methods used by the PDS API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Retrieve a resource.
    Get,
    /// Retrieve only the headers of a resource.
    Head,
    /// Create a resource or run a bulk action.
    Post,
    /// Replace a resource.
    Put,
    /// Partially update a resource.
    Patch,
    /// Remove a resource.
    Delete,
}

impl HttpMethod {
    /// Returns `true` if requests with this method must carry a body.
    #[must_use]
    pub const fn requires_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }

    /// Returns `true` if requests with this method never carry a body.
    #[must_use]
    pub const fn forbids_body(&self) -> bool {
        matches!(self, Self::Get | Self::Head)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Head => write!(f, "head"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Patch => write!(f, "patch"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Head => Self::HEAD,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Patch => Self::PATCH,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// Content type for HTTP request bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DataType {
    /// JSON content type (`application/json`).
    #[default]
    Json,
}

impl DataType {
    /// Returns the MIME type string for this data type.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
        }
    }
}

/// An HTTP request to be sent to the PDS API.
///
/// # Example
///
/// ```rust
/// use gs1_pds::clients::{HttpRequest, HttpMethod, DataType};
/// use gs1_pds::BaseUri;
/// use serde_json::json;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "products/search")
///     .query_param("gpc", "10000045")
///     .build()
///     .unwrap();
///
/// let base = BaseUri::new("https://example.com/api").unwrap();
/// assert_eq!(request.url(&base), "https://example.com/api/products/search?gpc=10000045");
///
/// let post = HttpRequest::builder(HttpMethod::Post, "products")
///     .body(json!({"gtin": "00012345678905"}))
///     .body_type(DataType::Json)
///     .build()
///     .unwrap();
/// assert!(post.body.is_some());
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path relative to the base URI, already percent-encoded.
    pub path: String,
    /// The request body, if any.
    pub body: Option<serde_json::Value>,
    /// The content type of the body.
    pub body_type: Option<DataType>,
    /// Ordered query parameters, unencoded.
    pub query: Vec<(String, String)>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `body` is `Some` but `body_type` is `None`
    /// - the method requires a body and `body` is `None`
    /// - the method is GET or HEAD and `body` is `Some`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.body.is_some() && self.body_type.is_none() {
            return Err(InvalidHttpRequestError::MissingBodyType);
        }

        if self.http_method.requires_body() && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        if self.http_method.forbids_body() && self.body.is_some() {
            return Err(InvalidHttpRequestError::UnexpectedBody {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }

    /// Builds the absolute URL for this request against `base`.
    ///
    /// The query string is appended only when at least one parameter is set.
    #[must_use]
    pub fn url(&self, base: &BaseUri) -> String {
        let endpoint = base.join(&self.path);
        if self.query.is_empty() {
            endpoint
        } else {
            format!("{endpoint}?{}", encode_filter(&self.query))
        }
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    body_type: Option<DataType>,
    query: Vec<(String, String)>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            body_type: None,
            query: Vec::new(),
        }
    }

    /// Sets the request body.
    ///
    /// When setting a body, you must also set the body type via [`body_type`](Self::body_type).
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the content type of the request body.
    #[must_use]
    pub const fn body_type(mut self, body_type: DataType) -> Self {
        self.body_type = Some(body_type);
        self
    }

    /// Sets a query parameter, replacing any earlier value for `key`.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        if let Some(existing) = self.query.iter_mut().find(|(k, _)| *k == key) {
            existing.1 = value;
        } else {
            self.query.push((key, value));
        }
        self
    }

    /// Appends the pairs of `filter` to the query.
    ///
    /// Keys already set with [`query_param`](Self::query_param) keep their
    /// explicit value.
    #[must_use]
    pub fn filter(mut self, filter: &dyn Filter) -> Self {
        for (key, value) in filter.pairs() {
            if !self.query.iter().any(|(k, _)| *k == key) {
                self.query.push((key, value));
            }
        }
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            body_type: self.body_type,
            query: self.query,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{ProductSearchFilter, QueryFilter};
    use serde_json::json;

    fn base() -> BaseUri {
        BaseUri::new("https://example.com/api").unwrap()
    }

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Head.to_string(), "head");
        assert_eq!(HttpMethod::Patch.to_string(), "patch");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_http_method_converts_to_reqwest() {
        assert_eq!(reqwest::Method::from(HttpMethod::Head), reqwest::Method::HEAD);
        assert_eq!(
            reqwest::Method::from(HttpMethod::Patch),
            reqwest::Method::PATCH
        );
    }

    #[test]
    fn test_verify_requires_body_for_post_put_patch() {
        for method in [HttpMethod::Post, HttpMethod::Put, HttpMethod::Patch] {
            let result = HttpRequest::builder(method, "products").build();
            assert!(matches!(
                result,
                Err(InvalidHttpRequestError::MissingBody { .. })
            ));
        }
    }

    #[test]
    fn test_verify_rejects_body_on_get() {
        let result = HttpRequest::builder(HttpMethod::Get, "products")
            .body(json!({}))
            .body_type(DataType::Json)
            .build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::UnexpectedBody { method }) if method == "get"
        ));
    }

    #[test]
    fn test_verify_requires_body_type_when_body_present() {
        let result = HttpRequest::builder(HttpMethod::Post, "products")
            .body(json!({"gtin": "1"}))
            .build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBodyType)
        ));
    }

    #[test]
    fn test_delete_builds_without_body() {
        let request = HttpRequest::builder(HttpMethod::Delete, "products/1/US")
            .build()
            .unwrap();
        assert!(request.body.is_none());
    }

    #[test]
    fn test_url_without_query() {
        let request = HttpRequest::builder(HttpMethod::Get, "products")
            .build()
            .unwrap();
        assert_eq!(request.url(&base()), "https://example.com/api/products");
    }

    #[test]
    fn test_url_for_empty_path_is_base() {
        let request = HttpRequest::builder(HttpMethod::Get, "").build().unwrap();
        assert_eq!(request.url(&base()), "https://example.com/api/");
    }

    #[test]
    fn test_filter_pairs_become_query() {
        let filter = ProductSearchFilter::new(Some("10000045"), Some("US"));
        let request = HttpRequest::builder(HttpMethod::Get, "products/search")
            .filter(&filter)
            .build()
            .unwrap();

        assert_eq!(
            request.url(&base()),
            "https://example.com/api/products/search?gpc=10000045&tm=US"
        );
    }

    #[test]
    fn test_explicit_query_param_wins_over_filter() {
        let filter = QueryFilter::new().with("tm", "FR").with("lang", "fr");

        let request = HttpRequest::builder(HttpMethod::Get, "products/search")
            .query_param("tm", "US")
            .filter(&filter)
            .build()
            .unwrap();
        assert_eq!(request.query[0], ("tm".to_string(), "US".to_string()));
        assert_eq!(request.query.len(), 2);

        let request = HttpRequest::builder(HttpMethod::Get, "products/search")
            .filter(&filter)
            .query_param("tm", "US")
            .build()
            .unwrap();
        assert_eq!(request.query[0], ("tm".to_string(), "US".to_string()));
    }

    #[test]
    fn test_request_headers_come_only_from_the_client() {
        let request = HttpRequest::builder(HttpMethod::Post, "products")
            .body(serde_json::json!([]))
            .body_type(DataType::Json)
            .build()
            .unwrap();

        let HttpRequest {
            http_method,
            path,
            body,
            body_type,
            query,
        } = request;

        assert_eq!(http_method, HttpMethod::Post);
        assert_eq!(path, "products");
        assert!(body.is_some());
        assert_eq!(body_type.map(|t| t.as_content_type()), Some("application/json"));
        assert!(query.is_empty());
    }

    #[test]
    fn test_empty_filter_adds_no_query_string() {
        let request = HttpRequest::builder(HttpMethod::Get, "products/search")
            .filter(&ProductSearchFilter::default())
            .build()
            .unwrap();
        assert!(!request.url(&base()).contains('?'));
    }
}
