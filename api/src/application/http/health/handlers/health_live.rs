use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::response::Response;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LivenessResponse {
    #[schema(example = "ok")]
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness check",
    responses(
        (status = 200, body = LivenessResponse)
    ),
)]
pub async fn health_live() -> Response<LivenessResponse> {
    Response::OK(LivenessResponse {
        status: "ok".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use axum::{Router, routing::get};
    use axum_test::TestServer;

    use super::*;

    #[tokio::test]
    async fn test_live_reports_ok() {
        let app = Router::new().route("/health/live", get(health_live));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health/live").await;

        response.assert_status_ok();
        response.assert_json(&LivenessResponse {
            status: "ok".to_string(),
        });
    }
}
