use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use foodstore_inventory::Catalog;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/inventory", get(list_inventory))
        .route("/:product", get(place_order))
        .route("/:product/restock", post(restock))
}

pub async fn list_inventory(Extension(catalog): Extension<Arc<Catalog>>) -> impl IntoResponse {
    Json(catalog.list())
}

pub async fn place_order(
    Extension(catalog): Extension<Arc<Catalog>>,
    Path(product): Path<String>,
    params: Result<Query<dto::OrderParams>, QueryRejection>,
) -> axum::response::Response {
    let receipt = catalog
        .ensure_exists(&product)
        .and_then(|()| dto::order_quantity(params))
        .and_then(|qty| catalog.place_order(&product, qty));

    match receipt {
        Ok(r) => (StatusCode::OK, Json(r)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn restock(
    Extension(catalog): Extension<Arc<Catalog>>,
    Path(product): Path<String>,
    params: Result<Query<dto::RestockParams>, QueryRejection>,
) -> axum::response::Response {
    let receipt = catalog
        .ensure_exists(&product)
        .and_then(|()| dto::restock_quantity(params))
        .and_then(|qty| catalog.restock(&product, qty));

    match receipt {
        Ok(r) => (StatusCode::OK, Json(r)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
