//! API documentation: an OpenAPI 3 description of the warehouse routes,
//! rendered by both Swagger UI and ReDoc.

use axum::{
    response::{Html, IntoResponse},
    Json,
};
use serde_json::{json, Value};

pub const OPENAPI_PATH: &str = "/api/openapi.json";

pub async fn openapi() -> impl IntoResponse {
    Json(openapi_document())
}

pub async fn swagger_ui() -> Html<String> {
    Html(format!(
        r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Food &amp; Beverage Catalog API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {{
      window.ui = SwaggerUIBundle({{ url: "{OPENAPI_PATH}", dom_id: "#swagger-ui" }});
    }};
  </script>
</body>
</html>"##
    ))
}

pub async fn redoc() -> Html<String> {
    Html(format!(
        r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Food &amp; Beverage Catalog API</title>
</head>
<body>
  <redoc spec-url="{OPENAPI_PATH}"></redoc>
  <script src="https://cdn.redoc.ly/redoc/latest/bundles/redoc.standalone.js"></script>
</body>
</html>"##
    ))
}

fn error_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Error" } } }
    })
}

fn product_param() -> Value {
    json!({
        "name": "product",
        "in": "path",
        "required": true,
        "description": "Product key, e.g. `pizza` or `beer`",
        "schema": { "type": "string" }
    })
}

fn quantity_param(name: &str, description: &str) -> Value {
    json!({
        "name": name,
        "in": "query",
        "required": true,
        "description": description,
        "schema": { "type": "integer", "minimum": 1 }
    })
}

pub fn openapi_document() -> Value {
    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Food and Beverage Catalog API",
            "description": "In-memory inventory for food products: list stock, place orders, restock.",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "paths": {
            "/health": {
                "get": {
                    "tags": ["General"],
                    "summary": "Liveness check",
                    "responses": { "200": { "description": "Service is up" } }
                }
            },
            "/warehouse/inventory": {
                "get": {
                    "tags": ["Warehouse"],
                    "summary": "List every product with price and current stock",
                    "responses": {
                        "200": {
                            "description": "Products sorted by key",
                            "content": { "application/json": { "schema": {
                                "type": "array",
                                "items": { "$ref": "#/components/schemas/Product" }
                            } } }
                        }
                    }
                }
            },
            "/warehouse/{product}": {
                "get": {
                    "tags": ["Warehouse"],
                    "summary": "Place an order, decrementing stock",
                    "parameters": [
                        product_param(),
                        quantity_param("order_qty", "Quantity to order (must be positive)"),
                    ],
                    "responses": {
                        "200": {
                            "description": "Order accepted",
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/OrderReceipt" } } }
                        },
                        "400": error_response("Insufficient stock"),
                        "404": error_response("Unknown product"),
                        "422": error_response("Missing, malformed or non-positive quantity"),
                    }
                }
            },
            "/warehouse/{product}/restock": {
                "post": {
                    "tags": ["Warehouse"],
                    "summary": "Add stock to a product",
                    "parameters": [
                        product_param(),
                        quantity_param("restock_qty", "Quantity to add (must be positive)"),
                    ],
                    "responses": {
                        "200": {
                            "description": "Stock increased",
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/RestockReceipt" } } }
                        },
                        "404": error_response("Unknown product"),
                        "422": error_response("Missing, malformed or non-positive quantity"),
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Product": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "display_name": { "type": "string" },
                        "units": { "type": "string" },
                        "price": { "type": "number" },
                        "stock": { "type": "integer", "minimum": 0 },
                        "in_stock": { "type": "boolean" }
                    }
                },
                "OrderReceipt": {
                    "type": "object",
                    "properties": {
                        "product": { "type": "string" },
                        "product_name": { "type": "string" },
                        "price": { "type": "number" },
                        "quantity": { "type": "integer" },
                        "units": { "type": "string" },
                        "total": { "type": "number" },
                        "remaining_stock": { "type": "integer" },
                        "message": { "type": "string" },
                        "ordered_at": { "type": "string", "format": "date-time" }
                    }
                },
                "RestockReceipt": {
                    "type": "object",
                    "properties": {
                        "product": { "type": "string" },
                        "product_name": { "type": "string" },
                        "previous_stock": { "type": "integer" },
                        "restocked_qty": { "type": "integer" },
                        "new_stock": { "type": "integer" },
                        "message": { "type": "string" }
                    }
                },
                "Error": {
                    "type": "object",
                    "required": ["error", "message"],
                    "properties": {
                        "error": { "type": "string", "enum": ["not_found", "invalid_quantity", "insufficient_stock"] },
                        "message": { "type": "string" },
                        "requested": { "type": "integer" },
                        "available": { "type": "integer" }
                    }
                }
            }
        }
    })
}
