//! Startup catalog.

use foodstore_core::Money;

use crate::catalog::Catalog;
use crate::product::Product;

/// The fixed catalog every service process starts with.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new("pizza", "Deluxe Pizza", "boxes", Money::from_cents(1299), 1000),
        Product::new("burger", "Classic Burger", "pieces", Money::from_cents(899), 750),
        Product::new("beer", "Craft Beer", "bottles", Money::from_cents(450), 500),
        Product::new("fries", "French Fries", "servings", Money::from_cents(399), 1200),
    ]
}

pub fn seeded_catalog() -> Catalog {
    Catalog::new(seed_products())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_the_four_menu_items() {
        let catalog = seeded_catalog();
        assert_eq!(catalog.keys(), vec!["beer", "burger", "fries", "pizza"]);
        assert!(catalog.list().iter().all(|p| p.in_stock));
    }

    #[test]
    fn seed_prices_are_positive() {
        assert!(seed_products().iter().all(|p| p.price() > Money::ZERO));
    }
}
