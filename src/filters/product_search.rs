//! Filter for the product search endpoint.

use super::{Filter, QueryFilter};

/// Search criteria for `GET products/search`.
///
/// Maps `gpc` to the `gpc` query key and `target_market` to `tm`. Unset
/// fields are not sent.
///
/// # Example
///
/// ```rust
/// use gs1_pds::filters::{encode_filter, Filter, ProductSearchFilter};
///
/// let filter = ProductSearchFilter {
///     gpc: Some("10000045".to_string()),
///     target_market: None,
/// };
/// assert_eq!(encode_filter(&filter.pairs()), "gpc=10000045");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductSearchFilter {
    /// Global Product Classification brick code.
    pub gpc: Option<String>,
    /// Target market country code.
    pub target_market: Option<String>,
}

impl ProductSearchFilter {
    /// Creates a filter for the given GPC code and target market.
    #[must_use]
    pub fn new(gpc: Option<&str>, target_market: Option<&str>) -> Self {
        Self {
            gpc: gpc.map(ToString::to_string),
            target_market: target_market.map(ToString::to_string),
        }
    }
}

impl Filter for ProductSearchFilter {
    fn pairs(&self) -> Vec<(String, String)> {
        let mut filter = QueryFilter::new();
        filter.insert_opt("gpc", self.gpc.as_deref());
        filter.insert_opt("tm", self.target_market.as_deref());
        filter.pairs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::encode_filter;

    #[test]
    fn test_both_fields_are_encoded_in_order() {
        let filter = ProductSearchFilter::new(Some("10000045"), Some("US"));
        assert_eq!(encode_filter(&filter.pairs()), "gpc=10000045&tm=US");
    }

    #[test]
    fn test_unset_fields_are_omitted() {
        let filter = ProductSearchFilter::new(None, Some("FR"));
        assert_eq!(encode_filter(&filter.pairs()), "tm=FR");

        let filter = ProductSearchFilter::default();
        assert!(filter.pairs().is_empty());
        assert_eq!(encode_filter(&filter.pairs()), "");
    }

    #[test]
    fn test_empty_string_is_sent_not_omitted() {
        let filter = ProductSearchFilter::new(Some(""), None);
        assert_eq!(encode_filter(&filter.pairs()), "gpc=");
    }
}
