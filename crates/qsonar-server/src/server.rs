//! Axum server setup and routing.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api;
use crate::state::AppState;

/// Create the Axum router with all routes.
///
/// `/ping` and `/scan` sit at the root, where the browser frontend expects
/// them; status endpoints live under `/api`.
pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/selfcheck", get(api::health::selfcheck));

    Router::new()
        .route("/", get(index))
        .route("/ping", post(api::sonar::ping))
        .route("/scan", post(api::sonar::scan))
        .nest("/api", api_routes)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> &'static str {
    "Quantum Battleship Server is Running. Ready for frontend."
}
