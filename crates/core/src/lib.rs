//! `foodstore-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no HTTP, no storage).

pub mod error;
pub mod money;
pub mod quantity;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use money::Money;
pub use quantity::Quantity;
pub use value_object::ValueObject;
