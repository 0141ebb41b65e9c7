//! Configuration types for the GS1 PDS client.
//!
//! # Overview
//!
//! - [`Gs1Config`]: All client settings, immutable once built
//! - [`Gs1ConfigBuilder`]: A builder that validates required credentials
//! - [`UserName`], [`UserApiKey`]: Validated API credentials
//! - [`BaseUri`]: The validated API base URI
//! - [`Authorization`]: An optional explicit `Authorization` header
//!
//! # Example
//!
//! ```rust
//! use gs1_pds::{Gs1Config, UserName, UserApiKey};
//!
//! let config = Gs1Config::builder()
//!     .user_name(UserName::new("acme").unwrap())
//!     .user_api_key(UserApiKey::new("my-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_limit(), 100);
//! ```

mod newtypes;

pub use newtypes::{Authorization, BaseUri, UserApiKey, UserName};

use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of requests allowed per rate-limit window.
pub const DEFAULT_API_LIMIT: u32 = 100;

/// Configuration for the GS1 PDS client.
///
/// `Gs1Config` is `Clone`, `Send`, and `Sync`. Credentials are validated
/// once, when the configuration is built, rather than on every call.
#[derive(Clone, Debug)]
pub struct Gs1Config {
    base_uri: BaseUri,
    user_name: UserName,
    user_api_key: UserApiKey,
    user_agent: String,
    api_limit: u32,
    records_per_page: Option<u32>,
    allow_deletions: bool,
    authorization: Option<Authorization>,
}

impl Gs1Config {
    /// Creates a new builder for constructing a `Gs1Config`.
    #[must_use]
    pub fn builder() -> Gs1ConfigBuilder {
        Gs1ConfigBuilder::new()
    }

    /// Returns the API base URI.
    #[must_use]
    pub const fn base_uri(&self) -> &BaseUri {
        &self.base_uri
    }

    /// Returns the account user name.
    #[must_use]
    pub const fn user_name(&self) -> &UserName {
        &self.user_name
    }

    /// Returns the API key.
    #[must_use]
    pub const fn user_api_key(&self) -> &UserApiKey {
        &self.user_api_key
    }

    /// Returns the `User-Agent` header value.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns the configured API limit.
    ///
    /// This seeds the client's rate-limit snapshot until the first response
    /// reports the real value.
    #[must_use]
    pub const fn api_limit(&self) -> u32 {
        self.api_limit
    }

    /// Returns the preferred number of records per page, if configured.
    #[must_use]
    pub const fn records_per_page(&self) -> Option<u32> {
        self.records_per_page
    }

    /// Returns whether delete operations are permitted.
    #[must_use]
    pub const fn allow_deletions(&self) -> bool {
        self.allow_deletions
    }

    /// Returns the explicit authorization header, if configured.
    #[must_use]
    pub const fn authorization(&self) -> Option<&Authorization> {
        self.authorization.as_ref()
    }
}

// Verify Gs1Config is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Gs1Config>();
};

/// Builder for constructing [`Gs1Config`] instances.
///
/// Required fields are `user_name` and `user_api_key`.
///
/// # Defaults
///
/// - `base_uri`: [`BaseUri::DEFAULT`]
/// - `user_agent`: `GS1 PDS Rust Library v{version}`
/// - `api_limit`: 100
/// - `records_per_page`: `None`
/// - `allow_deletions`: `false`
/// - `authorization`: `None`
#[derive(Debug, Default)]
pub struct Gs1ConfigBuilder {
    base_uri: Option<BaseUri>,
    user_name: Option<UserName>,
    user_api_key: Option<UserApiKey>,
    user_agent: Option<String>,
    api_limit: Option<u32>,
    records_per_page: Option<u32>,
    allow_deletions: Option<bool>,
    authorization: Option<Authorization>,
}

impl Gs1ConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URI.
    #[must_use]
    pub fn base_uri(mut self, uri: BaseUri) -> Self {
        self.base_uri = Some(uri);
        self
    }

    /// Sets the account user name (required).
    #[must_use]
    pub fn user_name(mut self, name: UserName) -> Self {
        self.user_name = Some(name);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn user_api_key(mut self, key: UserApiKey) -> Self {
        self.user_api_key = Some(key);
        self
    }

    /// Sets the `User-Agent` header value.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets the API limit used before the first response is seen.
    #[must_use]
    pub const fn api_limit(mut self, limit: u32) -> Self {
        self.api_limit = Some(limit);
        self
    }

    /// Sets the preferred number of records per page.
    #[must_use]
    pub const fn records_per_page(mut self, records: u32) -> Self {
        self.records_per_page = Some(records);
        self
    }

    /// Permits or forbids delete operations.
    #[must_use]
    pub const fn allow_deletions(mut self, allow: bool) -> Self {
        self.allow_deletions = Some(allow);
        self
    }

    /// Sets an explicit `Authorization` header.
    ///
    /// When set, it replaces HTTP basic auth on every request.
    #[must_use]
    pub fn authorization(mut self, authorization: Authorization) -> Self {
        self.authorization = Some(authorization);
        self
    }

    /// Builds the [`Gs1Config`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `user_name` or
    /// `user_api_key` are not set.
    pub fn build(self) -> Result<Gs1Config, ConfigError> {
        let user_name = self
            .user_name
            .ok_or(ConfigError::MissingRequiredField { field: "user_name" })?;
        let user_api_key = self
            .user_api_key
            .ok_or(ConfigError::MissingRequiredField {
                field: "user_api_key",
            })?;

        Ok(Gs1Config {
            base_uri: self.base_uri.unwrap_or_default(),
            user_name,
            user_api_key,
            user_agent: self
                .user_agent
                .unwrap_or_else(|| format!("GS1 PDS Rust Library v{SDK_VERSION}")),
            api_limit: self.api_limit.unwrap_or(DEFAULT_API_LIMIT),
            records_per_page: self.records_per_page,
            allow_deletions: self.allow_deletions.unwrap_or(false),
            authorization: self.authorization,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_user_name() {
        let result = Gs1ConfigBuilder::new()
            .user_api_key(UserApiKey::new("key").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "user_name" })
        ));
    }

    #[test]
    fn test_builder_requires_user_api_key() {
        let result = Gs1ConfigBuilder::new()
            .user_name(UserName::new("acme").unwrap())
            .build();

        let error = result.unwrap_err();
        assert_eq!(
            error,
            ConfigError::MissingRequiredField {
                field: "user_api_key"
            }
        );
        assert!(error.to_string().contains("user_api_key"));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = Gs1Config::builder()
            .user_name(UserName::new("acme").unwrap())
            .user_api_key(UserApiKey::new("key").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.base_uri().as_ref(), BaseUri::DEFAULT);
        assert_eq!(config.api_limit(), DEFAULT_API_LIMIT);
        assert!(config.user_agent().starts_with("GS1 PDS Rust Library v"));
        assert!(config.records_per_page().is_none());
        assert!(!config.allow_deletions());
        assert!(config.authorization().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = Gs1Config::builder()
            .base_uri(BaseUri::new("https://pds.example.com/api").unwrap())
            .user_name(UserName::new("acme").unwrap())
            .user_api_key(UserApiKey::new("key").unwrap())
            .user_agent("Catalog/2.1")
            .api_limit(250)
            .records_per_page(50)
            .allow_deletions(true)
            .authorization(Authorization::new("Bearer", "t0k3n").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.base_uri().as_ref(), "https://pds.example.com/api/");
        assert_eq!(config.user_agent(), "Catalog/2.1");
        assert_eq!(config.api_limit(), 250);
        assert_eq!(config.records_per_page(), Some(50));
        assert!(config.allow_deletions());
        assert_eq!(config.authorization().unwrap().scheme(), "Bearer");
    }

    #[test]
    fn test_config_debug_does_not_leak_key() {
        let config = Gs1Config::builder()
            .user_name(UserName::new("acme").unwrap())
            .user_api_key(UserApiKey::new("do-not-print").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("Gs1Config"));
        assert!(!debug_str.contains("do-not-print"));
    }
}
