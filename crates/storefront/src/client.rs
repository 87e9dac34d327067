//! HTTP client for the inventory service.

use std::time::Duration;

use axum::http::StatusCode;
use reqwest::Url;
use serde::de::DeserializeOwned;

use foodstore_inventory::{ErrorBody, OrderReceipt, ProductView};

/// Everything that can go wrong talking to the inventory service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InvalidQuantity(String),
    #[error("{message}")]
    InsufficientStock {
        message: String,
        requested: Option<u32>,
        available: Option<u32>,
    },
    #[error("inventory service unavailable: {0}")]
    UpstreamUnavailable(String),
    #[error("unexpected response from inventory service ({status}): {message}")]
    Unexpected { status: u16, message: String },
    #[error("invalid inventory service URL '{0}'")]
    InvalidBaseUrl(String),
    #[error("failed to build HTTP client: {0}")]
    Build(String),
}

impl ClientError {
    /// Status the storefront answers with when rendering this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ClientError::NotFound(_) => StatusCode::NOT_FOUND,
            ClientError::InvalidQuantity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ClientError::InsufficientStock { .. } => StatusCode::BAD_REQUEST,
            ClientError::UpstreamUnavailable(_) | ClientError::Unexpected { .. } => {
                StatusCode::BAD_GATEWAY
            }
            ClientError::InvalidBaseUrl(_) | ClientError::Build(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Short human heading for the error page.
    pub fn title(&self) -> &'static str {
        match self {
            ClientError::NotFound(_) => "Product not found",
            ClientError::InvalidQuantity(_) => "Invalid quantity",
            ClientError::InsufficientStock { .. } => "Insufficient stock",
            ClientError::UpstreamUnavailable(_) => "Inventory service unavailable",
            ClientError::Unexpected { .. } => "Unexpected inventory response",
            ClientError::InvalidBaseUrl(_) | ClientError::Build(_) => "Storefront misconfigured",
        }
    }

    fn from_error_response(status: StatusCode, body: Option<ErrorBody>) -> Self {
        let (code, message) = match body {
            Some(b) => {
                if b.error == "insufficient_stock" {
                    return ClientError::InsufficientStock {
                        message: b.message,
                        requested: b.requested,
                        available: b.available,
                    };
                }
                (Some(b.error), b.message)
            }
            None => (None, status.canonical_reason().unwrap_or("error").to_string()),
        };

        match (code.as_deref(), status) {
            (Some("not_found"), _) | (None, StatusCode::NOT_FOUND) => ClientError::NotFound(message),
            (Some("invalid_quantity"), _) | (None, StatusCode::UNPROCESSABLE_ENTITY) => {
                ClientError::InvalidQuantity(message)
            }
            _ => ClientError::Unexpected {
                status: status.as_u16(),
                message,
            },
        }
    }
}

/// Thin wrapper over a pooled `reqwest::Client` rooted at the service's base URL.
#[derive(Debug, Clone)]
pub struct WarehouseClient {
    base: Url,
    http: reqwest::Client,
}

impl WarehouseClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let base = Url::parse(base_url).map_err(|_| ClientError::InvalidBaseUrl(base_url.to_string()))?;
        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;

        Ok(Self { base, http })
    }

    pub fn base_url(&self) -> &str {
        self.base.as_str()
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // `new` rejected cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// `Ok` if the service answers its health check.
    pub async fn health(&self) -> Result<(), ClientError> {
        let resp = self.send(self.http.get(self.endpoint(&["health"]))).await?;
        let _: serde_json::Value = decode(resp).await?;
        Ok(())
    }

    pub async fn list_inventory(&self) -> Result<Vec<ProductView>, ClientError> {
        let url = self.endpoint(&["warehouse", "inventory"]);
        decode(self.send(self.http.get(url)).await?).await
    }

    /// Forward an order. `order_qty` is passed through untouched so the
    /// service does all quantity validation.
    pub async fn place_order(&self, product: &str, order_qty: &str) -> Result<OrderReceipt, ClientError> {
        let product = product.trim();
        if product.is_empty() {
            return Err(ClientError::NotFound("no product selected".to_string()));
        }
        // `warehouse/inventory` is the listing route, never a product.
        if product == "inventory" {
            return Err(ClientError::NotFound(format!("Product '{product}' not found")));
        }

        let url = self.endpoint(&["warehouse", product]);
        let req = self.http.get(url).query(&[("order_qty", order_qty.trim())]);
        decode(self.send(req).await?).await
    }

    async fn send(&self, req: reqwest::RequestBuilder) -> Result<reqwest::Response, ClientError> {
        req.send().await.map_err(|e| {
            tracing::warn!(base_url = %self.base, "inventory request failed: {e}");
            ClientError::UpstreamUnavailable(e.to_string())
        })
    }
}

async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return resp.json().await.map_err(|e| ClientError::Unexpected {
            status: status.as_u16(),
            message: e.to_string(),
        });
    }

    let body = resp.json::<ErrorBody>().await.ok();
    Err(ClientError::from_error_response(status, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> WarehouseClient {
        WarehouseClient::new(base, Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn rejects_non_http_base_urls() {
        for bad in ["not a url", "mailto:ops@example.com", "ftp://host"] {
            assert!(matches!(
                WarehouseClient::new(bad, Duration::from_secs(1)),
                Err(ClientError::InvalidBaseUrl(_))
            ));
        }
    }

    #[test]
    fn endpoint_appends_and_encodes_segments() {
        let c = client("http://localhost:8000");
        assert_eq!(
            c.endpoint(&["warehouse", "inventory"]).as_str(),
            "http://localhost:8000/warehouse/inventory"
        );
        assert_eq!(
            c.endpoint(&["warehouse", "White Russians"]).as_str(),
            "http://localhost:8000/warehouse/White%20Russians"
        );
    }

    #[test]
    fn endpoint_keeps_base_path_prefix() {
        let c = client("http://gateway/food/");
        assert_eq!(c.endpoint(&["health"]).as_str(), "http://gateway/food/health");
    }

    #[test]
    fn error_bodies_map_to_variants() {
        let body = |error: &str| ErrorBody {
            error: error.to_string(),
            message: "msg".to_string(),
            requested: None,
            available: None,
        };

        assert_eq!(
            ClientError::from_error_response(StatusCode::NOT_FOUND, Some(body("not_found"))),
            ClientError::NotFound("msg".into())
        );
        assert_eq!(
            ClientError::from_error_response(StatusCode::UNPROCESSABLE_ENTITY, Some(body("invalid_quantity"))),
            ClientError::InvalidQuantity("msg".into())
        );
        assert!(matches!(
            ClientError::from_error_response(StatusCode::BAD_REQUEST, Some(body("insufficient_stock"))),
            ClientError::InsufficientStock { .. }
        ));
        assert!(matches!(
            ClientError::from_error_response(StatusCode::INTERNAL_SERVER_ERROR, None),
            ClientError::Unexpected { status: 500, .. }
        ));
        assert!(matches!(
            ClientError::from_error_response(StatusCode::NOT_FOUND, None),
            ClientError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn blank_product_is_not_found_without_a_request() {
        // Port 9 (discard) is never contacted: the check happens first.
        let c = client("http://127.0.0.1:9");
        assert!(matches!(c.place_order("  ", "1").await, Err(ClientError::NotFound(_))));
    }

    #[tokio::test]
    async fn listing_segment_is_not_a_product() {
        let c = client("http://127.0.0.1:9");
        assert_eq!(
            c.place_order(" inventory ", "1").await,
            Err(ClientError::NotFound("Product 'inventory' not found".into()))
        );
    }
}
