use serde::{Deserialize, Serialize};

use foodstore_core::{DomainError, DomainResult, Money, Quantity};

/// A catalog entry: one product, its price and what is left on the shelf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    key: String,
    display_name: String,
    units: String,
    price: Money,
    stock: u32,
}

impl Product {
    pub fn new(
        key: impl Into<String>,
        display_name: impl Into<String>,
        units: impl Into<String>,
        price: Money,
        stock: u32,
    ) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
            units: units.into(),
            price,
            stock,
        }
    }

    /// Catalog key (`pizza`, `beer`, ...). Unique within a catalog.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn units(&self) -> &str {
        &self.units
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Decide whether `qty` can be taken from this product.
    ///
    /// Pure: returns the order total without touching stock.
    pub fn check_order(&self, qty: Quantity) -> DomainResult<Money> {
        if qty.get() > self.stock {
            return Err(DomainError::insufficient_stock(&self.key, qty.get(), self.stock));
        }
        self.price
            .checked_mul(qty.get())
            .ok_or_else(|| DomainError::invalid_quantity(format!("total for {qty} {} overflows", self.units)))
    }

    /// Check and take `qty` units off the shelf, returning the order total.
    ///
    /// On error stock is left untouched.
    pub fn take(&mut self, qty: Quantity) -> DomainResult<Money> {
        let total = self.check_order(qty)?;
        self.stock -= qty.get();
        Ok(total)
    }

    /// Add `qty` units, returning the stock level before the restock.
    pub fn restock(&mut self, qty: Quantity) -> DomainResult<u32> {
        let previous = self.stock;
        self.stock = previous.checked_add(qty.get()).ok_or_else(|| {
            DomainError::invalid_quantity(format!(
                "restocking {qty} would exceed the maximum stock of {}",
                u32::MAX
            ))
        })?;
        Ok(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pizza(stock: u32) -> Product {
        Product::new("pizza", "Deluxe Pizza", "boxes", Money::from_cents(1000), stock)
    }

    fn qty(n: u32) -> Quantity {
        Quantity::new(n).unwrap()
    }

    #[test]
    fn take_decrements_stock_and_prices_the_order() {
        let mut p = pizza(5);
        let total = p.take(qty(3)).unwrap();
        assert_eq!(total, Money::from_cents(3000));
        assert_eq!(p.stock(), 2);
    }

    #[test]
    fn take_rejects_more_than_stock_without_mutation() {
        let mut p = pizza(2);
        let err = p.take(qty(5)).unwrap_err();
        assert_eq!(err, DomainError::insufficient_stock("pizza", 5, 2));
        assert_eq!(p.stock(), 2);
    }

    #[test]
    fn take_exactly_the_stock_empties_the_shelf() {
        let mut p = pizza(4);
        p.take(qty(4)).unwrap();
        assert_eq!(p.stock(), 0);
        assert!(!p.in_stock());
    }

    #[test]
    fn empty_shelf_refuses_any_order() {
        let mut p = pizza(0);
        assert!(matches!(
            p.take(qty(1)),
            Err(DomainError::InsufficientStock { available: 0, .. })
        ));
    }

    #[test]
    fn restock_adds_exactly_the_quantity() {
        let mut p = pizza(2);
        let previous = p.restock(qty(10)).unwrap();
        assert_eq!(previous, 2);
        assert_eq!(p.stock(), 12);
    }

    #[test]
    fn restock_overflow_is_rejected() {
        let mut p = pizza(u32::MAX - 1);
        let err = p.restock(qty(5)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidQuantity(_)));
        assert_eq!(p.stock(), u32::MAX - 1);
    }

    #[test]
    fn check_order_is_side_effect_free() {
        let p = pizza(5);
        let before = p.clone();
        let _ = p.check_order(qty(3));
        let _ = p.check_order(qty(30));
        assert_eq!(p, before);
    }
}
