use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::{AppService, AppState};
use axum::extract::State;
use foodtrace_core::domain::chat::ports::ChatService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LlmHealthResponse {
    #[schema(value_type = Object)]
    pub data: serde_json::Value,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "llm",
    summary = "LLM service health",
    description = "Relays the LLM service health report. Reports unhealthy instead of failing.",
    responses(
        (status = 200, body = LlmHealthResponse)
    ),
)]
pub async fn llm_health<S: AppService>(
    State(state): State<AppState<S>>,
) -> Response<LlmHealthResponse> {
    let report = state.service.llm_health().await;

    Response::OK(LlmHealthResponse { data: report })
}
