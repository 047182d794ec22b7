//! Liveness and health handlers

use axum::Json;
use serde::{Deserialize, Serialize};

/// Liveness response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

/// Liveness check - is the server running?
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Yatri travel planner API is running".to_string(),
    })
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn root_reports_running() {
        let response = root().await;
        assert!(response.message.contains("running"));
    }

    #[tokio::test]
    async fn health_check_reports_healthy() {
        let response = health_check().await;
        assert_eq!(response.status, "healthy");
    }

    #[test]
    fn health_response_serialization() {
        let resp = HealthResponse {
            status: "healthy".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"status":"healthy"}"#);
    }
}
