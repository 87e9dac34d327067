//! HTTP API application wiring (Axum router + shared catalog).
//!
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: query parameter shapes
//! - `errors.rs`: consistent error responses
//! - `docs.rs`: OpenAPI document and the interactive docs page

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use foodstore_inventory::Catalog;

pub mod docs;
pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route("/", get(routes::system::index))
        .route("/health", get(routes::system::health))
        .route("/api/docs", get(docs::swagger_ui))
        .route("/api/redoc", get(docs::redoc))
        .route("/api/openapi.json", get(docs::openapi))
        .nest("/warehouse", routes::warehouse::router())
        .layer(Extension(catalog))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}
