//! Request and response bodies of the sonar API.

use serde::{Deserialize, Serialize};

/// Body of `POST /ping` and `POST /scan`.
///
/// `id` is optional so a missing identifier can be answered with a JSON
/// error instead of a deserialization rejection.
#[derive(Debug, Default, Deserialize)]
pub struct TargetRequest {
    /// Cell (`A1`) or scan line (`scan-row-A`).
    #[serde(default)]
    pub id: Option<String>,
}

/// Response of `POST /ping`.
#[derive(Debug, Serialize, Deserialize)]
pub struct PingResponse {
    /// The pinged cell, as sent.
    pub id: String,
    /// `1` for a ship, `0` for open water.
    pub result: u8,
}

/// Response of `POST /scan`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScanResponse {
    /// The scanned line, as sent.
    pub id: String,
    /// Ships on the line, 0 to 4.
    pub count: u8,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status (always "ok" if responding).
    pub status: String,
    /// Server version.
    pub version: String,
    /// Name of the execution backend.
    pub backend: String,
}

impl HealthResponse {
    /// A healthy response naming `backend`.
    pub fn ok(backend: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            backend: backend.into(),
        }
    }
}
