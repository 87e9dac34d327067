//! Storefront application wiring (Axum router + inventory client).

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::client::WarehouseClient;

pub mod routes;

/// Build the storefront router (public entrypoint used by `main.rs` and tests).
pub fn build_app(client: Arc<WarehouseClient>) -> Router {
    Router::new()
        .route("/", get(routes::order_form).post(routes::submit_order))
        .route("/inventory", get(routes::inventory))
        .route("/health", get(routes::health))
        .layer(Extension(client))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
