//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated GS1 account user name.
///
/// # Example
///
/// ```rust
/// use gs1_pds::UserName;
///
/// let name = UserName::new("acme").unwrap();
/// assert_eq!(name.as_ref(), "acme");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    /// Creates a new validated user name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyUserName`] if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ConfigError::EmptyUserName);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated GS1 API key.
///
/// The `Debug` implementation masks the key, displaying only
/// `UserApiKey(*****)`.
///
/// # Example
///
/// ```rust
/// use gs1_pds::UserApiKey;
///
/// let key = UserApiKey::new("my-key").unwrap();
/// assert_eq!(format!("{:?}", key), "UserApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct UserApiKey(String);

impl UserApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyUserApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyUserApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for UserApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for UserApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UserApiKey(*****)")
    }
}

/// A validated base URI for the PDS API.
///
/// Only absolute `http` and `https` URLs are accepted. The value is
/// normalized to end with a single `/` so resource paths can be appended
/// directly.
///
/// # Example
///
/// ```rust
/// use gs1_pds::BaseUri;
///
/// let uri = BaseUri::new("https://cloud.stg.gs1.org/gs1-pds/api").unwrap();
/// assert_eq!(uri.as_ref(), "https://cloud.stg.gs1.org/gs1-pds/api/");
/// assert_eq!(uri.host_name(), "cloud.stg.gs1.org");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUri {
    uri: String,
    host_start: usize,
    host_end: usize,
}

impl BaseUri {
    /// The GS1 PDS staging endpoint.
    pub const DEFAULT: &'static str = "https://cloud.stg.gs1.org/gs1-pds/api/";

    /// Creates a new validated base URI.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUri`] if the URI has no `http`/`https`
    /// scheme, no host, or carries a query string or fragment.
    pub fn new(uri: impl Into<String>) -> Result<Self, ConfigError> {
        let uri = uri.into();
        let trimmed = uri.trim();
        let invalid = || ConfigError::InvalidBaseUri {
            uri: trimmed.to_string(),
        };

        let host_start = if trimmed.starts_with("https://") {
            "https://".len()
        } else if trimmed.starts_with("http://") {
            "http://".len()
        } else {
            return Err(invalid());
        };

        if trimmed.contains(['?', '#']) {
            return Err(invalid());
        }

        let remainder = &trimmed[host_start..];
        let host_len = remainder.find([':', '/']).unwrap_or(remainder.len());
        if host_len == 0 {
            return Err(invalid());
        }

        let mut normalized = trimmed.trim_end_matches('/').to_string();
        normalized.push('/');

        Ok(Self {
            uri: normalized,
            host_start,
            host_end: host_start + host_len,
        })
    }

    /// Returns the host name portion of the URI.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.uri[self.host_start..self.host_end]
    }

    /// Joins a resource path onto this base URI.
    ///
    /// Leading slashes on `path` are ignored, so the result always has
    /// exactly one separator between base and path. An empty path yields
    /// the base URI itself.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.uri, path.trim_start_matches('/'))
    }
}

impl Default for BaseUri {
    fn default() -> Self {
        Self {
            uri: Self::DEFAULT.to_string(),
            host_start: "https://".len(),
            host_end: "https://cloud.stg.gs1.org".len(),
        }
    }
}

impl AsRef<str> for BaseUri {
    fn as_ref(&self) -> &str {
        &self.uri
    }
}

/// An explicit `Authorization` header layered over the API credentials.
///
/// When configured, the client sends `Authorization: {scheme} {credentials}`
/// and does not send HTTP basic auth. Credentials are masked in `Debug`.
///
/// # Example
///
/// ```rust
/// use gs1_pds::Authorization;
///
/// let auth = Authorization::new("Bearer", "token-123").unwrap();
/// assert_eq!(auth.header_value(), "Bearer token-123");
/// assert!(!format!("{:?}", auth).contains("token-123"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Authorization {
    scheme: String,
    credentials: String,
}

impl Authorization {
    /// Creates a new authorization scheme/credentials pair.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAuthorization`] if the scheme is empty or
    /// contains whitespace, or if the credentials are empty.
    pub fn new(
        scheme: impl Into<String>,
        credentials: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let scheme = scheme.into();
        let credentials = credentials.into();

        if scheme.is_empty() || scheme.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidAuthorization {
                reason: format!("scheme '{scheme}' must be a single non-empty token"),
            });
        }
        if credentials.is_empty() {
            return Err(ConfigError::InvalidAuthorization {
                reason: "credentials cannot be empty".to_string(),
            });
        }

        Ok(Self {
            scheme,
            credentials,
        })
    }

    /// Returns the authorization scheme (e.g., "Bearer").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns the full header value, `{scheme} {credentials}`.
    #[must_use]
    pub fn header_value(&self) -> String {
        format!("{} {}", self.scheme, self.credentials)
    }
}

impl fmt::Debug for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Authorization({} *****)", self.scheme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_name_rejects_blank() {
        assert!(matches!(UserName::new(""), Err(ConfigError::EmptyUserName)));
        assert!(matches!(UserName::new("   "), Err(ConfigError::EmptyUserName)));
    }

    #[test]
    fn test_user_api_key_masks_value_in_debug() {
        let key = UserApiKey::new("super-secret-key").unwrap();
        let debug_output = format!("{:?}", key);
        assert_eq!(debug_output, "UserApiKey(*****)");
        assert!(!debug_output.contains("super-secret-key"));
    }

    #[test]
    fn test_base_uri_appends_trailing_slash() {
        let uri = BaseUri::new("https://example.com/api").unwrap();
        assert_eq!(uri.as_ref(), "https://example.com/api/");

        let uri = BaseUri::new("https://example.com/api///").unwrap();
        assert_eq!(uri.as_ref(), "https://example.com/api/");
    }

    #[test]
    fn test_base_uri_host_name_with_port() {
        let uri = BaseUri::new("http://127.0.0.1:8080/api/").unwrap();
        assert_eq!(uri.host_name(), "127.0.0.1");
    }

    #[test]
    fn test_base_uri_rejects_invalid() {
        assert!(BaseUri::new("example.com/api").is_err());
        assert!(BaseUri::new("ftp://example.com").is_err());
        assert!(BaseUri::new("https://").is_err());
        assert!(BaseUri::new("https:///api").is_err());
        assert!(BaseUri::new("https://example.com/api?x=1").is_err());
    }

    #[test]
    fn test_base_uri_join_uses_single_separator() {
        let uri = BaseUri::new("https://example.com/api").unwrap();
        assert_eq!(uri.join("products"), "https://example.com/api/products");
        assert_eq!(uri.join("/products"), "https://example.com/api/products");
        assert_eq!(
            uri.join("products/123/US"),
            "https://example.com/api/products/123/US"
        );
        assert_eq!(uri.join(""), "https://example.com/api/");
    }

    #[test]
    fn test_default_base_uri_is_pds_staging() {
        let uri = BaseUri::default();
        assert_eq!(uri.as_ref(), BaseUri::DEFAULT);
        assert_eq!(uri.host_name(), "cloud.stg.gs1.org");
        assert_eq!(uri, BaseUri::new(BaseUri::DEFAULT).unwrap());
    }

    #[test]
    fn test_authorization_validation() {
        assert!(Authorization::new("", "token").is_err());
        assert!(Authorization::new("Bear er", "token").is_err());
        assert!(Authorization::new("Bearer", "").is_err());

        let auth = Authorization::new("Bearer", "abc").unwrap();
        assert_eq!(auth.scheme(), "Bearer");
        assert_eq!(auth.header_value(), "Bearer abc");
        assert_eq!(format!("{:?}", auth), "Authorization(Bearer *****)");
    }
}
