use anyhow::{Context, Result};
use polyglot_api::{build_orchestrator, config::Config, server};
use std::net::SocketAddr;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("polyglot_api=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;

    // No timeout: a stuck completion stalls only the request waiting on it
    let client = reqwest::Client::builder()
        .build()
        .context("Failed to create HTTP client")?;

    let orchestrator = build_orchestrator(client, &config);
    info!(
        "Using model {} (echo original: {})",
        config.openai_model,
        orchestrator.options().echo_original
    );

    let app = server::create_router(server::AppState::new(orchestrator));

    let addr = SocketAddr::from((config.host, config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
