//! Top-level entry point for the GS1 PDS API.

use crate::clients::{RateLimit, RequestObserver, RestClient, RestError};
use crate::config::Gs1Config;
use crate::rest::Products;

/// Client for the GS1 Product Data Service.
///
/// Owns the configuration and a single [`RestClient`], whose connection pool
/// and rate-limit state are shared by every resource façade it hands out.
///
/// # Thread Safety
///
/// `Gs1Client` is `Send + Sync`; wrap it in an `Arc` to share it across tasks.
///
/// # Example
///
/// ```rust,ignore
/// use gs1_pds::{Gs1Client, Gs1Config, UserApiKey, UserName};
///
/// let config = Gs1Config::builder()
///     .user_name(UserName::new("acme")?)
///     .user_api_key(UserApiKey::new("my-key")?)
///     .build()?;
///
/// let client = Gs1Client::new(config)?;
/// let products = client.products().get_all_products().await?;
/// println!("{} products, {} requests left", products.len(), client.rate_limit().remaining);
/// ```
#[derive(Debug)]
pub struct Gs1Client {
    config: Gs1Config,
    rest_client: RestClient,
}

// Verify Gs1Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Gs1Client>();
};

impl Gs1Client {
    /// Creates a client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the underlying HTTP client cannot be
    /// created.
    pub fn new(config: Gs1Config) -> Result<Self, RestError> {
        let rest_client = RestClient::new(&config)?;
        Ok(Self {
            config,
            rest_client,
        })
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &Gs1Config {
        &self.config
    }

    /// Returns the verb-level REST client.
    #[must_use]
    pub const fn rest_client(&self) -> &RestClient {
        &self.rest_client
    }

    /// Returns the product operations.
    #[must_use]
    pub const fn products(&self) -> Products<'_> {
        Products::new(&self.rest_client, self.config.allow_deletions())
    }

    /// Returns the most recently observed rate-limit snapshot.
    #[must_use]
    pub fn rate_limit(&self) -> RateLimit {
        self.rest_client.rate_limit()
    }

    /// Registers an observer notified after every successfully decoded request.
    pub fn add_observer(&mut self, observer: impl RequestObserver + 'static) {
        self.rest_client.add_observer(observer);
    }
}
