//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every way an order or restock can be refused. Handlers map each variant to
/// its own HTTP status, so nothing here knows about transport.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The product key is not in the catalog.
    #[error("product '{product}' not found")]
    NotFound {
        product: String,
        /// Keys that do exist, for the caller's benefit.
        available: Vec<String>,
    },

    /// A quantity was missing, malformed, or not strictly positive.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    /// The order asks for more than is on the shelf.
    #[error("insufficient stock for '{product}': requested {requested}, available {available}")]
    InsufficientStock {
        product: String,
        requested: u32,
        available: u32,
    },
}

impl DomainError {
    pub fn not_found(product: impl Into<String>, available: Vec<String>) -> Self {
        Self::NotFound {
            product: product.into(),
            available,
        }
    }

    pub fn invalid_quantity(msg: impl Into<String>) -> Self {
        Self::InvalidQuantity(msg.into())
    }

    pub fn insufficient_stock(product: impl Into<String>, requested: u32, available: u32) -> Self {
        Self::InsufficientStock {
            product: product.into(),
            requested,
            available,
        }
    }

    /// Stable machine-readable code, shared by the JSON error payload.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::NotFound { .. } => "not_found",
            DomainError::InvalidQuantity(_) => "invalid_quantity",
            DomainError::InsufficientStock { .. } => "insufficient_stock",
        }
    }
}
