//! Health check endpoint handler.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::app::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
}

/// Health check endpoint.
///
/// Probes the database with a trivial query; reports 200 when the store is
/// reachable and 503 with the failure cause otherwise. Pool gauges are
/// refreshed on every probe.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    persistence::metrics::record_pool_metrics(&state.pool);

    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy".to_string(),
                database: "connected".to_string(),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unhealthy".to_string(),
                    database: e.to_string(),
                }),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_healthy_shape() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            database: "connected".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["database"], "connected");
    }

    #[test]
    fn test_health_response_unhealthy_carries_cause() {
        let response = HealthResponse {
            status: "unhealthy".to_string(),
            database: "connection refused".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "unhealthy");
        assert_eq!(json["database"], "connection refused");
    }
}
