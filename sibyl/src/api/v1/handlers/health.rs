use axum::extract::State;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode};

/// Health data returned inside the v1 envelope.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthData {
    pub status: String,
    pub version: String,
    /// The store's nanosecond heartbeat at check time.
    pub chroma_heartbeat: u64,
}

/// `GET /api/v1/health`
///
/// Verifies vector-store connectivity; an unreachable store fails the
/// check with a 503.
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "health",
    responses(
        (status = 200, description = "Service health status", body = HealthData),
        (status = 503, description = "Vector store unavailable", body = ApiError),
    )
)]
pub async fn health_check(State(state): State<AppState>) -> ApiResponse<HealthData> {
    match state.store.heartbeat().await {
        Ok(heartbeat) => ApiResponse::success(HealthData {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            chroma_heartbeat: heartbeat,
        }),
        Err(e) => {
            tracing::error!(error = %e, "Health check failed");
            ApiResponse::error(ErrorCode::Unavailable, "Vector store is not reachable")
        }
    }
}
