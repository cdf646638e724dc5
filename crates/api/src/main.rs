use std::sync::Arc;

use anyhow::Context;

use dealcart_catalog::ProductRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dealcart_observability::init();

    let catalog_path = std::env::var("DEALCART_CATALOG").unwrap_or_else(|_| {
        tracing::warn!("DEALCART_CATALOG not set; using data/products.json");
        "data/products.json".to_string()
    });

    let raw = std::fs::read_to_string(&catalog_path)
        .with_context(|| format!("failed to read catalog at {catalog_path}"))?;
    let catalog = Arc::new(
        ProductRepository::from_json_str(&raw)
            .with_context(|| format!("failed to load catalog from {catalog_path}"))?,
    );
    tracing::info!(products = catalog.len(), "catalog loaded");

    let app = dealcart_api::app::build_app(catalog);

    let addr = std::env::var("DEALCART_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
