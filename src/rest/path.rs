//! Path building infrastructure for REST resources.
//!
//! Every resource declares a table of [`ResourcePath`]s, one per operation,
//! and resolves the concrete request path from it at call time.
//!
//! # Path Resolution
//!
//! [`get_path`] selects the path for an operation whose required ids are all
//! available, preferring the most specific one. [`build_path`] then
//! interpolates the ids into the template.
//!
//! Id values are percent-encoded as single path segments, so a value that
//! contains `/` can never introduce an extra segment.
//!
//! # Example
//!
//! ```rust
//! use gs1_pds::rest::{ResourcePath, ResourceOperation, get_path, build_path};
//! use gs1_pds::clients::HttpMethod;
//! use std::collections::HashMap;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(
//!         HttpMethod::Get,
//!         ResourceOperation::Find,
//!         &["gtin", "target_market"],
//!         "products/{gtin}/{target_market}",
//!     ),
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "products"),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::Find, &["gtin", "target_market"]);
//! assert!(path.is_some());
//!
//! let mut ids = HashMap::new();
//! ids.insert("gtin", "00012345678905");
//! ids.insert("target_market", "US");
//! let url = build_path(path.unwrap().template, &ids);
//! assert_eq!(url, "products/00012345678905/US");
//! ```

use crate::clients::HttpMethod;
use std::collections::HashMap;
use std::fmt::Display;

/// Operations that can be performed on a REST resource.
///
/// Each operation corresponds to a specific HTTP method and URL pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// List all resources (GET /resources).
    All,
    /// Search resources by filter (GET /resources/search).
    Search,
    /// Fetch a single resource by its ids (GET /resources/{ids}).
    Find,
    /// Check that the API key may access a resource.
    Authenticate,
    /// Read a resource's last-modified time (HEAD /resources/{ids}).
    Timestamp,
    /// Create one or many resources (POST /resources).
    Create,
    /// Replace an existing resource (PUT /resources/{ids}).
    Update,
    /// Partially update an existing resource (PATCH /resources/{ids}).
    Edit,
    /// Delete a resource (DELETE /resources/{ids}).
    Delete,
    /// Delete many resources at once (POST /resources/delete).
    BulkDelete,
}

impl ResourceOperation {
    /// Returns the default HTTP method for this operation.
    #[must_use]
    pub const fn default_http_method(&self) -> HttpMethod {
        match self {
            Self::All | Self::Search | Self::Find | Self::Authenticate => HttpMethod::Get,
            Self::Timestamp => HttpMethod::Head,
            Self::Create | Self::BulkDelete => HttpMethod::Post,
            Self::Update => HttpMethod::Put,
            Self::Edit => HttpMethod::Patch,
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Search => "search",
            Self::Find => "find",
            Self::Authenticate => "authenticate",
            Self::Timestamp => "timestamp",
            Self::Create => "create",
            Self::Update => "update",
            Self::Edit => "edit",
            Self::Delete => "delete",
            Self::BulkDelete => "bulk_delete",
        }
    }
}

/// A path configuration for a REST resource operation.
///
/// Templates use `{id_name}` placeholders for id interpolation:
/// - `products` - No ids
/// - `products/{gtin}/authenticate` - Single id
/// - `products/{gtin}/{target_market}` - Multiple ids
///
/// # Example
///
/// ```rust
/// use gs1_pds::rest::{ResourcePath, ResourceOperation};
/// use gs1_pds::clients::HttpMethod;
///
/// const PRODUCT_FIND: ResourcePath = ResourcePath::new(
///     HttpMethod::Get,
///     ResourceOperation::Find,
///     &["gtin", "target_market"],
///     "products/{gtin}/{target_market}",
/// );
/// assert_eq!(PRODUCT_FIND.id_count(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// Required id parameters in order (e.g., `["gtin", "target_market"]`).
    pub ids: &'static [&'static str],
    /// The URL template with `{id}` placeholders.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    ///
    /// This is a `const fn` to allow paths to be defined as constants.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Returns the number of required ids for this path.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks if all required ids are available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Selects the best matching path for an operation.
///
/// Paths are filtered by operation and by available ids; the one with the
/// most required ids wins.
///
/// Returns `None` if no path matches.
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Builds a path from a template by interpolating ids.
///
/// Each value is percent-encoded before it replaces its `{id_name}`
/// placeholder. Placeholders with no matching id are left as they are.
///
/// # Example
///
/// ```rust
/// use gs1_pds::rest::build_path;
/// use std::collections::HashMap;
///
/// let mut ids = HashMap::new();
/// ids.insert("gtin", "0001/2345");
///
/// let url = build_path("products/{gtin}/authenticate", &ids);
/// assert_eq!(url, "products/0001%2F2345/authenticate");
/// ```
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        let segment = urlencoding::encode(&value.to_string()).into_owned();
        result = result.replace(&placeholder, &segment);
    }

    result
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};
