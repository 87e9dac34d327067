use std::sync::Arc;

use anyhow::Context;

use foodstore_api::config::ServiceConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    foodstore_observability::init();

    let config = ServiceConfig::from_env()?;
    let catalog = Arc::new(foodstore_inventory::seeded_catalog());
    tracing::info!(products = catalog.len(), "catalog seeded");

    let app = foodstore_api::app::build_app(catalog);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
