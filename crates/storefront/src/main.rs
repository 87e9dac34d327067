use std::sync::Arc;

use anyhow::Context;

use foodstore_storefront::{client::WarehouseClient, config::StorefrontConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    foodstore_observability::init();

    let config = StorefrontConfig::from_env()?;
    let client = WarehouseClient::new(&config.inventory_api_url, config.timeout)
        .context("failed to configure inventory client")?;

    if let Err(e) = client.health().await {
        // Not fatal: pages render an error until the service comes up.
        tracing::warn!(upstream = client.base_url(), "inventory service not reachable yet: {e}");
    }

    let app = foodstore_storefront::app::build_app(Arc::new(client));

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    tracing::info!(upstream = %config.inventory_api_url, "listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
