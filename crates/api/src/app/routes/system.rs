use std::sync::Arc;

use axum::{extract::Extension, response::IntoResponse, Json};

use foodstore_inventory::Catalog;

pub async fn health(Extension(catalog): Extension<Arc<Catalog>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "products_available": catalog.len(),
    }))
}

pub async fn index() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Food & Beverage Catalog API",
        "version": env!("CARGO_PKG_VERSION"),
        "docs": "/api/docs",
        "redoc": "/api/redoc",
        "endpoints": {
            "inventory": "/warehouse/inventory",
            "order": "/warehouse/{product}?order_qty=N",
            "restock": "/warehouse/{product}/restock?restock_qty=N",
            "health": "/health",
        }
    }))
}
