//! Error types for the GS1 PDS client.
//!
//! This module contains the configuration errors raised while building a
//! [`Gs1Config`](crate::Gs1Config). Request-time failures live in
//! [`clients::HttpError`](crate::clients::HttpError) and the layers above it.
//!
//! # Example
//!
//! ```rust
//! use gs1_pds::{UserApiKey, ConfigError};
//!
//! let result = UserApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyUserApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while building the client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// User name cannot be empty.
    #[error("User name cannot be empty. Please provide the GS1 account user name.")]
    EmptyUserName,

    /// API key cannot be empty.
    #[error("User API key cannot be empty. Please provide a valid GS1 API key.")]
    EmptyUserApiKey,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Base URI is invalid.
    #[error("Invalid base URI '{uri}'. Please provide an absolute http(s) URL (e.g., 'https://cloud.stg.gs1.org/gs1-pds/api/').")]
    InvalidBaseUri {
        /// The invalid URI that was provided.
        uri: String,
    },

    /// Authorization scheme or credentials are invalid.
    #[error("Invalid authorization: {reason}")]
    InvalidAuthorization {
        /// Why the authorization was rejected.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_field_names_the_field() {
        let error = ConfigError::MissingRequiredField {
            field: "user_api_key",
        };
        let message = error.to_string();
        assert!(message.contains("user_api_key"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_invalid_base_uri_error_message() {
        let error = ConfigError::InvalidBaseUri {
            uri: "ftp://nope".to_string(),
        };
        assert!(error.to_string().contains("ftp://nope"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyUserApiKey;
        let _: &dyn std::error::Error = &error;
    }
}
