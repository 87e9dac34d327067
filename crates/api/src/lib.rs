//! Inventory service: HTTP server, routing, and request/response mapping.

// The OpenAPI document in `app::docs` is one large `json!` literal.
#![recursion_limit = "256"]

pub mod app;
pub mod config;
