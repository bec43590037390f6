use axum::extract::State;
use foodtrace_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::{AppService, AppState},
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ReadinessResponse {
    pub database: DatabaseHealthStatus,
}

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness check",
    description = "Pings the database.",
    responses(
        (status = 200, body = ReadinessResponse),
        (status = 503, body = ApiErrorResponse)
    ),
)]
pub async fn health_ready<S: AppService>(
    State(state): State<AppState<S>>,
) -> Result<Response<ReadinessResponse>, ApiError> {
    let database = state.service.readiness().await.map_err(|e| {
        warn!("readiness check failed: {}", e);
        ApiError::ServiceUnavailable("Database unavailable".to_string())
    })?;

    Ok(Response::OK(ReadinessResponse { database }))
}
