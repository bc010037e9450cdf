//! Screening Predictor server binary

use std::sync::Arc;

use anyhow::Context;
use screening_predict::{create_router, AppState, Config, MockScorer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // Initialize logging
    let production = config.is_production();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "screening_predict=debug,tower_http=debug".into()))
        .with(production.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!production).then(tracing_subscriber::fmt::layer))
        .init();

    tracing::info!("Screening predictor starting ({})", config.environment);

    let scorer = Arc::new(MockScorer::default());
    tracing::warn!(
        "Serving placeholder scorer: threshold {} affirmative answers, confidence {}",
        scorer.affirmative_threshold,
        scorer.confidence
    );

    let addr = config.socket_addr();
    let app = create_router(AppState::new(config, scorer));

    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
