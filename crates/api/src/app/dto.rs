use axum::extract::{rejection::QueryRejection, Query};
use serde::Deserialize;

use foodstore_core::{DomainError, DomainResult, Quantity};

// -------------------------
// Query parameters
// -------------------------

// Quantities are taken as raw text, and a query string that fails to
// deserialize at all (e.g. a repeated parameter) is folded in as well, so
// every bad quantity becomes `invalid_quantity` instead of axum's plain-text
// query rejection.

#[derive(Debug, Default, Deserialize)]
pub struct OrderParams {
    pub order_qty: Option<String>,
}

impl OrderParams {
    pub fn quantity(&self) -> DomainResult<Quantity> {
        Quantity::parse_param("order_qty", self.order_qty.as_deref())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RestockParams {
    pub restock_qty: Option<String>,
}

impl RestockParams {
    pub fn quantity(&self) -> DomainResult<Quantity> {
        Quantity::parse_param("restock_qty", self.restock_qty.as_deref())
    }
}

pub fn order_quantity(params: Result<Query<OrderParams>, QueryRejection>) -> DomainResult<Quantity> {
    match params {
        Ok(Query(p)) => p.quantity(),
        Err(rejection) => Err(rejected("order_qty", &rejection)),
    }
}

pub fn restock_quantity(params: Result<Query<RestockParams>, QueryRejection>) -> DomainResult<Quantity> {
    match params {
        Ok(Query(p)) => p.quantity(),
        Err(rejection) => Err(rejected("restock_qty", &rejection)),
    }
}

fn rejected(name: &str, rejection: &QueryRejection) -> DomainError {
    DomainError::invalid_quantity(format!(
        "{name} must be a single positive integer ({})",
        rejection.body_text()
    ))
}
