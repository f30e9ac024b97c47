//! HTTP route handlers for the API.

use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use overseer_common::{DelegationOutcome, OverseerError, Task};
use overseer_supervisor::SupervisorStatus;
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};

/// Root endpoint response.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub running: bool,
    pub uptime_seconds: u64,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
    #[serde(skip)]
    pub status: StatusCode,
}

impl ErrorResponse {
    fn bad_request(error: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            code: "INVALID_TASK",
            status: StatusCode::BAD_REQUEST,
        }
    }

    fn internal(error: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            code: "DELEGATION_ERROR",
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// Root endpoint.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        status: "online",
        service: "Overseer",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Health check endpoint.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let supervisor = state.supervisor.read().await;
    let running = supervisor.is_running();

    Json(HealthResponse {
        status: if running { "healthy" } else { "degraded" },
        running,
        uptime_seconds: state.uptime_seconds(),
    })
}

/// Full supervisor status snapshot.
pub async fn status(State(state): State<Arc<AppState>>) -> Json<SupervisorStatus> {
    let supervisor = state.supervisor.read().await;
    Json(supervisor.status())
}

/// Delegate a task to an agent offering its capability.
pub async fn delegate_task(
    State(state): State<Arc<AppState>>,
    Json(task): Json<Task>,
) -> Result<Json<DelegationOutcome>, ErrorResponse> {
    info!(
        capability = task.capability.as_deref().unwrap_or("<missing>"),
        action = task.action.as_deref().unwrap_or("<none>"),
        "Received task"
    );

    let supervisor = state.supervisor.read().await;
    match supervisor.delegate_task(&task).await {
        Ok(outcome) => Ok(Json(outcome)),
        Err(err @ OverseerError::MissingCapability) => Err(ErrorResponse::bad_request(err)),
        Err(err) => {
            error!(error = %err, "Task delegation failed");
            Err(ErrorResponse::internal(err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "healthy",
            running: true,
            uptime_seconds: 100,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("uptime_seconds"));
    }

    #[test]
    fn test_error_response_skips_status_field() {
        let response = ErrorResponse::bad_request("Task must specify a capability");
        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("INVALID_TASK"));
        assert!(!json.contains("400"));
    }
}
