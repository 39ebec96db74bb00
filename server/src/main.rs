use imc_suggestions_api::{app, config::ServerConfig};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (ignored in production where env vars are set externally)
    let _ = dotenvy::dotenv();

    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let addr = config.addr();
    info!("IMC suggestions server v1.0.0 listening on {}", addr);
    info!("Routes:");
    info!("  GET  /");
    info!("  POST /api/sugerencias");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app()).await?;

    Ok(())
}
