//! Query filters attached to API requests.
//!
//! A [`Filter`] yields ordered key/value pairs that the request pipeline
//! appends to the request's query string. Values are percent-encoded by
//! [`encode_filter`]; keys are sent as given.
//!
//! # Example
//!
//! ```rust
//! use gs1_pds::filters::{encode_filter, Filter, QueryFilter};
//!
//! let filter = QueryFilter::new()
//!     .with("gpc", "10000045")
//!     .with("tm", "US");
//!
//! assert_eq!(encode_filter(&filter.pairs()), "gpc=10000045&tm=US");
//! ```

mod product_search;

pub use product_search::ProductSearchFilter;

/// A source of query parameters for a request.
pub trait Filter: Send + Sync {
    /// Returns the key/value pairs to send, in order.
    ///
    /// Keys whose value is unset must be left out entirely.
    fn pairs(&self) -> Vec<(String, String)>;
}

/// A general-purpose ordered filter.
///
/// Inserting an existing key replaces its value in place, so the encoded
/// order is the order in which keys were first inserted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryFilter {
    pairs: Vec<(String, String)>,
}

impl QueryFilter {
    /// Creates an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(existing) = self.pairs.iter_mut().find(|(k, _)| *k == key) {
            existing.1 = value;
        } else {
            self.pairs.push((key, value));
        }
    }

    /// Sets `key` to `value` when `value` is `Some`.
    pub fn insert_opt(&mut self, key: impl Into<String>, value: Option<impl Into<String>>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    /// Builder-style variant of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Returns the number of pairs in the filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if the filter has no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl Filter for QueryFilter {
    fn pairs(&self) -> Vec<(String, String)> {
        self.pairs.clone()
    }
}

/// Encodes pairs as `key=value&key=value`, percent-encoding each value.
///
/// An empty slice encodes to an empty string.
#[must_use]
pub fn encode_filter(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}
