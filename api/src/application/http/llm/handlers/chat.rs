use crate::application::http::llm::validators::ChatRequestValidator;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::{AppService, AppState};
use axum::extract::State;
use foodtrace_core::domain::chat::entities::ChatReply;
use foodtrace_core::domain::chat::ports::ChatService;
use foodtrace_core::domain::chat::value_objects::ChatInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ChatResponse {
    pub data: ChatReply,
}

#[utoipa::path(
    post,
    path = "/chat",
    tag = "llm",
    summary = "Chat with the assistant",
    description = "Relays a question and recent history to the LLM service.",
    request_body = ChatRequestValidator,
    responses(
        (status = 200, body = ChatResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 503, body = ApiErrorResponse)
    ),
)]
pub async fn chat<S: AppService>(
    State(state): State<AppState<S>>,
    ValidateJson(payload): ValidateJson<ChatRequestValidator>,
) -> Result<Response<ChatResponse>, ApiError> {
    let conversation_history = payload.history();

    let reply = state
        .service
        .chat(ChatInput {
            message: payload.message,
            conversation_history,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ChatResponse { data: reply }))
}
