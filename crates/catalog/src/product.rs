use serde::{Deserialize, Serialize};

use dealcart_core::ProductId;

/// A catalog product (immutable, catalog-origin).
///
/// Wire names stay camelCase to match the catalog source schema. Numeric
/// fields default to zero when absent; the rest of the record is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Identity key, unique within the catalog.
    pub id: ProductId,
    pub title: String,
    pub description: String,
    /// Classification label, matched exactly (case-sensitive) by the category
    /// filter. A label outside the presented filter set simply never matches.
    pub category: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub original_price: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
    /// Opaque displayable-asset reference; never dereferenced here.
    pub image: String,
    /// Ordered feature bullets (may be empty).
    #[serde(default)]
    pub features: Vec<String>,
    /// Opaque outbound URI; only ever copied or navigated, never parsed.
    pub affiliate_link: String,
}

impl Product {
    /// Discount badge value, clamped at zero.
    ///
    /// An `original_price` of zero (or less) means "no discount" rather than
    /// a division error, and an original price below the current price never
    /// produces a negative badge.
    pub fn discount_percent(&self) -> u32 {
        if self.original_price <= 0.0 {
            return 0;
        }
        let pct = ((self.original_price - self.price) / self.original_price * 100.0).round();
        if pct <= 0.0 { 0 } else { pct as u32 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: f64, original_price: f64) -> Product {
        Product {
            id: ProductId::new(1),
            title: "Wireless Mouse".to_string(),
            description: "Ergonomic 2.4GHz mouse".to_string(),
            category: "Electronics".to_string(),
            price,
            original_price,
            rating: 4.5,
            review_count: 812,
            image: "mouse.jpg".to_string(),
            features: vec!["2.4GHz".to_string()],
            affiliate_link: "https://example.com/aff/1".to_string(),
        }
    }

    #[test]
    fn discount_is_rounded_percentage_off_original() {
        assert_eq!(product(80.0, 100.0).discount_percent(), 20);
        assert_eq!(product(74.99, 99.99).discount_percent(), 25);
    }

    #[test]
    fn equal_prices_mean_no_discount() {
        assert_eq!(product(100.0, 100.0).discount_percent(), 0);
    }

    #[test]
    fn zero_original_price_means_no_discount_not_a_division_error() {
        assert_eq!(product(100.0, 0.0).discount_percent(), 0);
    }

    #[test]
    fn inverted_prices_clamp_to_zero_instead_of_going_negative() {
        assert_eq!(product(120.0, 100.0).discount_percent(), 0);
    }

    #[test]
    fn parses_camel_case_source_record() {
        let raw = r#"{
            "id": 3,
            "title": "Cotton Shirt",
            "description": "Breathable everyday shirt",
            "category": "Fashion",
            "price": 24.99,
            "originalPrice": 34.99,
            "rating": 4.2,
            "reviewCount": 150,
            "image": "shirt.jpg",
            "features": ["100% cotton"],
            "affiliateLink": "https://example.com/aff/3"
        }"#;

        let parsed: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.id, ProductId::new(3));
        assert_eq!(parsed.original_price, 34.99);
        assert_eq!(parsed.review_count, 150);
        assert_eq!(parsed.affiliate_link, "https://example.com/aff/3");
    }

    #[test]
    fn missing_numeric_fields_default_to_zero() {
        let raw = r#"{
            "id": 9,
            "title": "Mystery Box",
            "description": "No pricing yet",
            "category": "Gadgets",
            "image": "box.jpg",
            "affiliateLink": "https://example.com/aff/9"
        }"#;

        let parsed: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.price, 0.0);
        assert_eq!(parsed.original_price, 0.0);
        assert_eq!(parsed.review_count, 0);
        assert!(parsed.features.is_empty());
        assert_eq!(parsed.discount_percent(), 0);
    }
}
