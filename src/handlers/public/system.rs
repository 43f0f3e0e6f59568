// handlers/public/system.rs - GET / and GET /health

use axum::extract::State;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::middleware::ApiResponse;
use crate::routes::AppState;

use super::auth::{LOGIN_ENDPOINT, VERIFY_ENDPOINT};

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub endpoints: ServiceEndpoints,
}

#[derive(Debug, Serialize)]
pub struct ServiceEndpoints {
    pub home: &'static str,
    pub health: &'static str,
    /// Retired routes that answer 410 Gone.
    pub deprecated: Vec<String>,
    pub login: &'static str,
    pub verify: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// GET / - service information
pub async fn root(State(config): State<AppState>) -> ApiResponse<ServiceInfo> {
    ApiResponse::success(ServiceInfo {
        name: "Storefront Auth",
        version: env!("CARGO_PKG_VERSION"),
        description: "Session role resolution and legacy verification endpoint",
        endpoints: ServiceEndpoints {
            home: "/",
            health: "/health",
            deprecated: config.legacy.verify_paths.clone(),
            login: LOGIN_ENDPOINT,
            verify: VERIFY_ENDPOINT,
        },
    })
}

/// GET /health - liveness only; nothing downstream to check
pub async fn health() -> ApiResponse<HealthStatus> {
    ApiResponse::success(HealthStatus {
        status: "ok",
        timestamp: Utc::now(),
    })
}
