//! Inventory domain module.
//!
//! Products, the in-memory catalog that owns their stock, and the order and
//! restock rules. No HTTP, no storage.

pub mod catalog;
pub mod product;
pub mod seed;
pub mod wire;

pub use catalog::Catalog;
pub use product::Product;
pub use seed::{seed_products, seeded_catalog};
pub use wire::{ErrorBody, OrderReceipt, ProductView, RestockReceipt};
