use super::handlers::health_live::{__path_health_live, health_live};
use super::handlers::health_ready::{__path_health_ready, health_ready};
use crate::application::http::server::app_state::{AppService, AppState};

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(health_live, health_ready))]
pub struct HealthApiDoc;

pub fn health_routes<S: AppService>(root_path: &str) -> Router<AppState<S>> {
    Router::new()
        .route(&format!("{root_path}/health/live"), get(health_live))
        .route(&format!("{root_path}/health/ready"), get(health_ready::<S>))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use foodtrace_core::domain::{
        common::entities::app_errors::CoreError, health::entities::DatabaseHealthStatus,
    };
    use serde_json::json;

    use crate::application::http::server::{
        api_entities::api_error::ApiErrorResponse, test_support::TestPorts,
    };

    #[tokio::test]
    async fn test_ready_reports_database_latency() {
        let mut ports = TestPorts::default();
        ports.health.expect_readiness().returning(|| {
            Box::pin(async {
                Ok(DatabaseHealthStatus {
                    healthy: true,
                    latency_ms: 3,
                })
            })
        });
        let server = ports.server();

        let response = server.get("/health/ready").await;

        response.assert_status_ok();
        response.assert_json(&json!({ "database": { "healthy": true, "latency_ms": 3 } }));
    }

    #[tokio::test]
    async fn test_ready_without_database_is_unavailable() {
        let mut ports = TestPorts::default();
        ports
            .health
            .expect_readiness()
            .returning(|| Box::pin(async { Err(CoreError::InternalServerError) }));
        let server = ports.server();

        let response = server.get("/health/ready").await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            response.json::<ApiErrorResponse>().message,
            "Database unavailable"
        );
    }

    #[tokio::test]
    async fn test_health_checks_are_not_rate_limited() {
        let server = TestPorts::default().server();

        for _ in 0..15 {
            server.get("/health/live").await.assert_status_ok();
        }
    }
}
