use storefront_auth::{config, is_production, routes};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up PORT, LEGACY_VERIFY_PATHS, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::config();
    tracing::info!("Starting Storefront Auth in {:?} mode", config.environment);

    if is_production!() && config.security.cors_origins.iter().any(|o| o == "*") {
        tracing::warn!("Permissive CORS enabled in production");
    }

    for path in &config.legacy.verify_paths {
        tracing::info!("Serving deprecated verification route {}", path);
    }

    let app = routes::app(config);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind {}: {}", bind_addr, e))?;

    tracing::info!("Storefront Auth listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
