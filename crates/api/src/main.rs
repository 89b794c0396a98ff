use std::sync::Arc;

use anyhow::Context;

use itemdex_api::config::ApiConfig;
use itemdex_catalog::Catalog;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    itemdex_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;

    let catalog = Catalog::load(&config.catalog_path)
        .inspect_err(|e| tracing::error!(error = %e, "catalog load failed"))
        .context("catalog is required to serve requests")?;

    let app = itemdex_api::app::build_app(Arc::new(catalog));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
}
