//! qsonar Server - HTTP API for quantum battleship.
//!
//! A thin adapter that answers the browser frontend's ping and scan requests
//! against a board fixed at startup:
//!
//! | Route | Body | Response |
//! |-------|------|----------|
//! | `POST /ping` | `{"id": "A1"}` | `{"id": "A1", "result": 0 \| 1}` |
//! | `POST /scan` | `{"id": "scan-row-A"}` | `{"id": "scan-row-A", "count": 0..=4}` |
//! | `GET /api/health` | | `{"status", "version", "backend"}` |
//! | `GET /api/selfcheck` | | engine known-answer report |
//!
//! Invalid input answers `400`, a failing backend `502` and an engine defect
//! `500`, each with an `{"error", "message"}` body.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use qsonar_adapter_sim::SimulatorBackend;
//! use qsonar_engine::SonarEngine;
//! use qsonar_server::{AppState, ServerConfig, create_router};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::default();
//!     let engine = SonarEngine::new(Arc::new(SimulatorBackend::new()));
//!     let state = Arc::new(AppState::with_config(config.clone(), engine)?);
//!
//!     let app = create_router(state);
//!     let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod dto;
pub mod error;
pub mod server;
pub mod state;

pub use dto::{HealthResponse, PingResponse, ScanResponse, TargetRequest};
pub use error::ApiError;
pub use server::create_router;
pub use state::{AppState, ServerConfig};
