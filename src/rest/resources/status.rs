//! Status record returned by authentication and bulk operations.

use serde::{Deserialize, Serialize};

/// Outcome reported by the API for a key check or a bulk operation item.
///
/// # Example
///
/// ```rust
/// use gs1_pds::rest::resources::Status;
///
/// let status: Status = serde_json::from_str(r#"{"statusCode": 1, "message": "OK"}"#).unwrap();
/// assert!(status.is_success());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    /// Result code; `1` means success.
    pub status_code: i32,

    /// Human-readable message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// The GTIN this status refers to, for per-item results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtin: Option<String>,

    /// The target market this status refers to, for per-item results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_market: Option<String>,
}

impl Status {
    /// The status code the API uses for success.
    pub const SUCCESS: i32 = 1;

    /// Returns `true` if the API reported success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status_code == Self::SUCCESS
    }
}
