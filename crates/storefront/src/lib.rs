//! Storefront: HTML pages in front of the inventory service.

pub mod app;
pub mod client;
pub mod config;
pub mod views;
