//! HTTP client for PDS API communication.
//!
//! This module provides the [`HttpClient`] type, which runs the request
//! pipeline: URL construction, authentication, dispatch, status
//! classification and rate-limit tracking. Observers are notified through
//! [`HttpClient::notify_observers`] once the caller has decoded the response.

use std::collections::HashMap;
use std::fmt;
use std::sync::{PoisonError, RwLock};

use crate::clients::errors::HttpError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::{HttpResponse, RateLimit};
use crate::clients::observer::RequestObserver;
use crate::config::{Authorization, BaseUri, Gs1Config, UserApiKey, UserName};

/// How requests are authenticated.
#[derive(Clone, Debug)]
enum Credentials {
    Basic {
        user_name: UserName,
        user_api_key: UserApiKey,
    },
    Header(Authorization),
}

/// HTTP client for making requests to the PDS API.
///
/// The client handles:
/// - URL construction from the configured [`BaseUri`]
/// - Default headers (`User-Agent`, `Accept`)
/// - HTTP basic auth, or an explicit `Authorization` header when one is configured
/// - Status classification into [`HttpError`]
/// - Rate-limit header tracking
/// - [`RequestObserver`] registration
///
/// Requests are never retried.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`. The last observed [`RateLimit`] is kept
/// behind a lock; overlapping calls are last-writer-wins on it, while every
/// response still carries its own snapshot.
///
/// # Example
///
/// ```rust,ignore
/// use gs1_pds::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let client = HttpClient::new(&config)?;
/// let request = HttpRequest::builder(HttpMethod::Get, "products").build()?;
/// let response = client.request(&request).await?;
/// client.notify_observers(&request, &response);
/// println!("{} requests left", client.rate_limit().remaining);
/// ```
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI, always ending in `/`.
    base_uri: BaseUri,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    credentials: Credentials,
    /// Last observed rate-limit snapshot.
    rate_limit: RwLock<RateLimit>,
    observers: Vec<Box<dyn RequestObserver>>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &Gs1Config) -> Result<Self, HttpError> {
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), config.user_agent().to_string());
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let credentials = config.authorization().map_or_else(
            || Credentials::Basic {
                user_name: config.user_name().clone(),
                user_api_key: config.user_api_key().clone(),
            },
            |auth| Credentials::Header(auth.clone()),
        );

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        tracing::debug!(
            "Created PDS client for {} (basic auth: {})",
            config.base_uri().as_ref(),
            matches!(credentials, Credentials::Basic { .. })
        );

        Ok(Self {
            client,
            base_uri: config.base_uri().clone(),
            default_headers,
            credentials,
            rate_limit: RwLock::new(RateLimit::initial(config.api_limit())),
            observers: Vec::new(),
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub const fn base_uri(&self) -> &BaseUri {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns `true` if requests use HTTP basic auth rather than an
    /// explicit `Authorization` header.
    #[must_use]
    pub const fn uses_basic_auth(&self) -> bool {
        matches!(self.credentials, Credentials::Basic { .. })
    }

    /// Returns the most recently observed rate-limit snapshot.
    ///
    /// Before the first response this is seeded from the configured API
    /// limit with a 30 second reset.
    #[must_use]
    pub fn rate_limit(&self) -> RateLimit {
        *self
            .rate_limit
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers an observer notified after every successful request.
    pub fn add_observer(&mut self, observer: impl RequestObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Calls every registered observer, in registration order.
    ///
    /// [`request`](Self::request) never does this itself: a call only counts
    /// as completed once its body has been decoded into the caller's type.
    pub fn notify_observers(&self, request: &HttpRequest, response: &HttpResponse) {
        for observer in &self.observers {
            observer.on_request_completed(request, response);
        }
    }

    /// Sends an HTTP request to the PDS API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs (`Network`)
    /// - A non-2xx response is received (classified by status code)
    /// - A success response lacks the rate-limit headers (`MissingRateLimitHeader`)
    /// - A success response body is not JSON (`InvalidBody`)
    pub async fn request(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = request.url(&self.base_uri);

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }

        let mut req_builder = self.client.request(request.http_method.into(), &url);

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        req_builder = match &self.credentials {
            Credentials::Basic {
                user_name,
                user_api_key,
            } => req_builder.basic_auth(user_name.as_ref(), Some(user_api_key.as_ref())),
            Credentials::Header(auth) => {
                req_builder.header(reqwest::header::AUTHORIZATION, auth.header_value())
            }
        };

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send().await?;

        let status = res.status();
        let code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or_default().to_string();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        if !status.is_success() {
            let response = HttpResponse::new(code, reason, res_headers, serde_json::Value::Null);
            return Err(self.classify_failure(request, &response));
        }

        let rate_limit = RateLimit::from_headers(&res_headers)?;
        self.record_rate_limit(rate_limit);

        tracing::debug!("{} {url}\n{res_headers:?}\n{body_text}", request.http_method);

        let body = if body_text.trim().is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(&body_text).map_err(|source| HttpError::InvalidBody { source })?
        };

        Ok(HttpResponse::new(code, reason, res_headers, body))
    }

    /// Maps a non-success response to its [`HttpError`].
    ///
    /// A 429 carrying rate-limit headers updates the shared snapshot before
    /// the error is returned; every other failure leaves it untouched.
    fn classify_failure(&self, request: &HttpRequest, response: &HttpResponse) -> HttpError {
        if response.code != 429 {
            return HttpError::from_status(response.code, response.reason.clone(), None);
        }

        let rate_limit = match response.rate_limit() {
            Ok(rate_limit) => {
                self.record_rate_limit(rate_limit);
                tracing::warn!(
                    "API limit reached on {} {}; {} seconds until reset",
                    request.http_method,
                    request.path,
                    rate_limit.reset_seconds
                );
                Some(rate_limit)
            }
            Err(e) => {
                tracing::warn!(
                    "API limit reached on {} {}; {e}",
                    request.http_method,
                    request.path
                );
                None
            }
        };

        HttpError::from_status(response.code, response.reason.clone(), rate_limit)
    }

    fn record_rate_limit(&self, rate_limit: RateLimit) {
        *self
            .rate_limit
            .write()
            .unwrap_or_else(PoisonError::into_inner) = rate_limit;

        tracing::info!(
            "There are {} requests left before a reset in {} seconds.",
            rate_limit.remaining,
            rate_limit.reset_seconds
        );
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_uri", &self.base_uri)
            .field("default_headers", &self.default_headers)
            .field("credentials", &self.credentials)
            .field("rate_limit", &self.rate_limit())
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SDK_VERSION;

    fn create_test_config() -> Gs1Config {
        Gs1Config::builder()
            .base_uri(BaseUri::new("https://pds.example.com/api").unwrap())
            .user_name(UserName::new("acme").unwrap())
            .user_api_key(UserApiKey::new("secret-key").unwrap())
            .api_limit(250)
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_with_config() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        assert_eq!(client.base_uri().as_ref(), "https://pds.example.com/api/");
        assert!(client.uses_basic_auth());
    }

    #[test]
    fn test_default_headers() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains(SDK_VERSION));
    }

    #[test]
    fn test_rate_limit_is_seeded_from_api_limit() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(client.rate_limit(), RateLimit::initial(250));
    }

    #[test]
    fn test_authorization_replaces_basic_auth() {
        let config = Gs1Config::builder()
            .user_name(UserName::new("acme").unwrap())
            .user_api_key(UserApiKey::new("secret-key").unwrap())
            .authorization(Authorization::new("Bearer", "t0k3n").unwrap())
            .build()
            .unwrap();

        let client = HttpClient::new(&config).unwrap();
        assert!(!client.uses_basic_auth());
    }

    #[test]
    fn test_debug_masks_credentials() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        let debug_str = format!("{client:?}");
        assert!(debug_str.contains("HttpClient"));
        assert!(!debug_str.contains("secret-key"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
