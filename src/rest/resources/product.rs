//! Product record as exchanged with the PDS API.
//!
//! Field names are camelCase on the wire. Fields this crate does not model
//! are kept in [`Product::extra`] so a record read from the API can be sent
//! back without losing anything.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A quantity printed on the product label (e.g., 500 ml).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NetContent {
    /// The measured amount.
    pub value: f64,
    /// The unit of measure code (e.g., "MLT", "GRM").
    pub unit_code: String,
}

/// A product record identified by GTIN and target market.
///
/// # Example
///
/// ```rust
/// use gs1_pds::rest::resources::Product;
///
/// let mut product = Product::new("00012345678905", "US");
/// product.brand_name = Some("Acme".to_string());
///
/// let json = serde_json::to_value(&product).unwrap();
/// assert_eq!(json["targetMarket"], "US");
/// assert_eq!(json["brandName"], "Acme");
/// assert!(json.get("imageUrl").is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Global Trade Item Number.
    pub gtin: String,

    /// Country or region code the record applies to.
    pub target_market: String,

    /// GPC brick code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpc_category_code: Option<String>,

    /// Brand name as printed on the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,

    /// Consumer-facing description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_description: Option<String>,

    /// Net contents; a product may declare several.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub net_content: Vec<NetContent>,

    /// URL of the primary product image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Last modification time as reported by the API.
    /// Read-only field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,

    /// Attributes not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// Creates a product with only its identifying keys set.
    #[must_use]
    pub fn new(gtin: impl Into<String>, target_market: impl Into<String>) -> Self {
        Self {
            gtin: gtin.into(),
            target_market: target_market.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_deserializes_camel_case_fields() {
        let product: Product = serde_json::from_value(json!({
            "gtin": "00012345678905",
            "targetMarket": "US",
            "gpcCategoryCode": "10000045",
            "brandName": "Acme",
            "netContent": [{"value": 500.0, "unitCode": "MLT"}]
        }))
        .unwrap();

        assert_eq!(product.gtin, "00012345678905");
        assert_eq!(product.target_market, "US");
        assert_eq!(product.gpc_category_code.as_deref(), Some("10000045"));
        assert_eq!(
            product.net_content,
            vec![NetContent {
                value: 500.0,
                unit_code: "MLT".to_string()
            }]
        );
        assert!(product.extra.is_empty());
    }

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let original = json!({
            "gtin": "00012345678905",
            "targetMarket": "US",
            "labelDescription": "Sparkling water",
            "lastModified": "2024-03-01T10:00:00Z",
            "packagingMaterial": {"code": "GLASS", "recyclable": true},
            "allergens": ["none"]
        });

        let product: Product = serde_json::from_value(original.clone()).unwrap();
        assert_eq!(product.extra.len(), 2);
        assert_eq!(product.extra["allergens"], json!(["none"]));

        let back = serde_json::to_value(&product).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn test_new_sets_only_keys() {
        let product = Product::new("1", "FR");
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json, json!({"gtin": "1", "targetMarket": "FR"}));
    }
}
