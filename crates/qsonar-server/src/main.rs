//! qsonar server binary entry point.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use qsonar_adapter_sim::SimulatorBackend;
use qsonar_engine::SonarEngine;
use qsonar_game::selfcheck;
use qsonar_hal::{BackendConfig, BackendFactory};
use qsonar_server::{AppState, ServerConfig, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qsonar_server=info,qsonar_game=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Create configuration
    let mut config = ServerConfig::default();
    if let Ok(bind) = std::env::var("QSONAR_BIND") {
        config.bind_address = bind
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid QSONAR_BIND address '{bind}': {e}"))?;
    }
    if let Ok(ships) = std::env::var("QSONAR_SHIPS") {
        config.ships = ships
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid QSONAR_SHIPS '{ships}': {e}"))?;
    }
    if let Ok(seed) = std::env::var("QSONAR_SEED") {
        config.seed = Some(
            seed.parse()
                .map_err(|e| anyhow::anyhow!("Invalid QSONAR_SEED '{seed}': {e}"))?,
        );
    }
    let bind_addr = config.bind_address;

    let mut backend_config = BackendConfig::new("simulator");
    if let Some(seed) = config.seed {
        backend_config = backend_config.with_extra("seed", serde_json::json!(seed));
    }
    let backend = SimulatorBackend::from_config(backend_config)?;
    let engine = SonarEngine::new(Arc::new(backend));

    // Known-answer check before accepting requests
    let report = selfcheck::run(&engine).await;
    for check in &report.checks {
        tracing::info!("[SELF-CHECK] {check}");
    }
    tracing::info!("Engine status: {}", report.status);

    let state = Arc::new(AppState::with_config(config, engine)?);
    tracing::info!("{} enemy signatures placed on grid", state.board.ship_count());

    // Create the router
    let app = create_router(state);

    // Start the server
    tracing::info!("Starting qsonar server at http://{}", bind_addr);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
