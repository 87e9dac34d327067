use std::sync::Arc;

use axum::{
    extract::{Extension, Form},
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use serde::Deserialize;

use crate::client::{ClientError, WarehouseClient};
use crate::views;

/// Order form fields. Both default to empty so a partial submission reaches
/// the inventory service's validation instead of failing form extraction.
#[derive(Debug, Default, Deserialize)]
pub struct OrderForm {
    #[serde(default)]
    pub product: String,
    #[serde(default)]
    pub order_qty: String,
}

fn error_response(err: ClientError) -> axum::response::Response {
    match &err {
        ClientError::UpstreamUnavailable(_) | ClientError::Unexpected { .. } => {
            tracing::error!("inventory call failed: {err}")
        }
        _ => tracing::warn!(kind = err.title(), "order rejected: {err}"),
    }
    (err.status(), Html(views::error_page(&err))).into_response()
}

pub async fn order_form(Extension(client): Extension<Arc<WarehouseClient>>) -> axum::response::Response {
    match client.list_inventory().await {
        Ok(products) => Html(views::order_form(&products)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn submit_order(
    Extension(client): Extension<Arc<WarehouseClient>>,
    Form(form): Form<OrderForm>,
) -> axum::response::Response {
    match client.place_order(&form.product, &form.order_qty).await {
        Ok(receipt) => {
            tracing::info!(
                product = %receipt.product,
                quantity = receipt.quantity,
                total = %receipt.total,
                "order confirmed"
            );
            Html(views::confirmation(&receipt)).into_response()
        }
        Err(e) => error_response(e),
    }
}

pub async fn inventory(Extension(client): Extension<Arc<WarehouseClient>>) -> axum::response::Response {
    match client.list_inventory().await {
        Ok(products) => Html(views::inventory(&products)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn health(Extension(client): Extension<Arc<WarehouseClient>>) -> impl IntoResponse {
    let upstream = match client.health().await {
        Ok(()) => "ok",
        Err(_) => "unavailable",
    };
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "ok",
            "upstream": upstream,
        })),
    )
}
