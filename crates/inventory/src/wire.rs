//! Wire shapes shared by the inventory service (serializing) and the
//! storefront (deserializing).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use foodstore_core::Money;

use crate::product::Product;

/// One row of the inventory listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductView {
    pub name: String,
    pub display_name: String,
    pub units: String,
    pub price: Money,
    pub stock: u32,
    pub in_stock: bool,
}

impl From<&Product> for ProductView {
    fn from(p: &Product) -> Self {
        Self {
            name: p.key().to_string(),
            display_name: p.display_name().to_string(),
            units: p.units().to_string(),
            price: p.price(),
            stock: p.stock(),
            in_stock: p.in_stock(),
        }
    }
}

/// Result of a successful order. Not retained after it is returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub product: String,
    pub product_name: String,
    pub price: Money,
    pub quantity: u32,
    pub units: String,
    pub total: Money,
    pub remaining_stock: u32,
    pub message: String,
    pub ordered_at: DateTime<Utc>,
}

/// Result of a successful restock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestockReceipt {
    pub product: String,
    pub product_name: String,
    pub previous_stock: u32,
    pub restocked_qty: u32,
    pub new_stock: u32,
    pub message: String,
}

/// Error payload returned with every 4xx from the inventory service.
///
/// `requested`/`available` are only present for insufficient stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_omits_absent_stock_details() {
        let body = ErrorBody {
            error: "not_found".into(),
            message: "Product 'kale' not found".into(),
            requested: None,
            available: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("requested").is_none());
        assert!(json.get("available").is_none());

        let back: ErrorBody = serde_json::from_value(json).unwrap();
        assert_eq!(back, body);
    }

    #[test]
    fn product_view_mirrors_the_product() {
        let p = Product::new("fries", "French Fries", "servings", Money::from_cents(399), 0);
        let v = ProductView::from(&p);
        assert_eq!(v.name, "fries");
        assert_eq!(v.price, Money::from_cents(399));
        assert!(!v.in_stock);
    }
}
