use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use foodstore_core::{DomainError, DomainResult, Quantity};

use crate::product::Product;
use crate::wire::{OrderReceipt, ProductView, RestockReceipt};

/// In-memory product catalog.
///
/// Owned by the service and shared behind an `Arc`. Every order and restock
/// holds the write lock across its check and its mutation, so concurrent
/// orders cannot both pass the stock check against the same units.
#[derive(Debug, Default)]
pub struct Catalog {
    inner: RwLock<BTreeMap<String, Product>>,
}

impl Catalog {
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        let map = products
            .into_iter()
            .map(|p| (p.key().to_string(), p))
            .collect();
        Self {
            inner: RwLock::new(map),
        }
    }

    // A panic mid-mutation cannot leave a product half-updated (each mutation
    // is a single field write after validation), so a poisoned lock is safe to reuse.
    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<String, Product>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<String, Product>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// All products, sorted by key.
    pub fn list(&self) -> Vec<ProductView> {
        self.read().values().map(ProductView::from).collect()
    }

    pub fn get(&self, key: &str) -> Option<Product> {
        self.read().get(key).cloned()
    }

    pub fn keys(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    /// `NotFound` unless `key` is in the catalog. Lets callers report an
    /// unknown product before looking at the quantity.
    pub fn ensure_exists(&self, key: &str) -> DomainResult<()> {
        let map = self.read();
        if map.contains_key(key) {
            Ok(())
        } else {
            Err(DomainError::not_found(key, map.keys().cloned().collect()))
        }
    }

    /// Take `qty` units of `key` off the shelf and price the order.
    pub fn place_order(&self, key: &str, qty: Quantity) -> DomainResult<OrderReceipt> {
        let mut map = self.write();
        let product = lookup(&mut map, key)?;
        let total = product.take(qty)?;

        tracing::info!(
            product = key,
            quantity = qty.get(),
            total = %total,
            remaining = product.stock(),
            "order placed"
        );

        Ok(OrderReceipt {
            product: product.key().to_string(),
            product_name: product.display_name().to_string(),
            price: product.price(),
            quantity: qty.get(),
            units: product.units().to_string(),
            total,
            remaining_stock: product.stock(),
            message: format!(
                "Successfully ordered {qty} {} of {}",
                product.units(),
                product.display_name()
            ),
            ordered_at: Utc::now(),
        })
    }

    /// Put `qty` more units of `key` on the shelf.
    pub fn restock(&self, key: &str, qty: Quantity) -> DomainResult<RestockReceipt> {
        let mut map = self.write();
        let product = lookup(&mut map, key)?;
        let previous = product.restock(qty)?;

        tracing::info!(
            product = key,
            previous,
            restocked = qty.get(),
            new_stock = product.stock(),
            "product restocked"
        );

        Ok(RestockReceipt {
            product: product.key().to_string(),
            product_name: product.display_name().to_string(),
            previous_stock: previous,
            restocked_qty: qty.get(),
            new_stock: product.stock(),
            message: format!("Successfully restocked {qty} {}", product.units()),
        })
    }
}

fn lookup<'a>(map: &'a mut BTreeMap<String, Product>, key: &str) -> DomainResult<&'a mut Product> {
    if !map.contains_key(key) {
        let available = map.keys().cloned().collect();
        return Err(DomainError::not_found(key, available));
    }
    map.get_mut(key)
        .ok_or_else(|| DomainError::not_found(key, Vec::new()))
}
