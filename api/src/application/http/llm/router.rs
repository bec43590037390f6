use super::handlers::chat::{__path_chat, chat};
use super::handlers::llm_health::{__path_llm_health, llm_health};
use crate::application::http::server::app_state::{AppService, AppState};

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(chat, llm_health))]
pub struct LlmApiDoc;

pub fn llm_routes<S: AppService>(root_path: &str) -> Router<AppState<S>> {
    Router::new()
        .route(&format!("{root_path}/llm/chat"), post(chat::<S>))
        .route(&format!("{root_path}/llm/health"), get(llm_health::<S>))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use foodtrace_core::domain::{
        chat::entities::{ChatReply, LLM_UNAVAILABLE_MESSAGE},
        common::entities::app_errors::CoreError,
    };
    use serde_json::{Value, json};

    use crate::application::http::server::{
        api_entities::api_error::ApiErrorResponse, test_support::TestPorts,
    };

    #[tokio::test]
    async fn test_chat_relays_history_and_wraps_reply() {
        let mut ports = TestPorts::default();
        ports
            .llm
            .expect_chat()
            .times(1)
            .withf(|input| {
                input.message == "哪些食材合格？" && input.conversation_history.len() == 1
            })
            .returning(|_| {
                Box::pin(async {
                    Ok(ChatReply {
                        response: "愛文芒果檢驗合格".to_string(),
                        model: "llama2".to_string(),
                    })
                })
            });
        let server = ports.server();

        let response = server
            .post("/llm/chat")
            .json(&json!({
                "message": "哪些食材合格？",
                "conversation_history": [{ "role": "user", "content": "你好" }]
            }))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "data": { "response": "愛文芒果檢驗合格", "model": "llama2" }
        }));
    }

    #[tokio::test]
    async fn test_chat_failure_is_service_unavailable() {
        let mut ports = TestPorts::default();
        ports.llm.expect_chat().returning(|_| {
            Box::pin(async {
                Err(CoreError::ServiceUnavailable(
                    "connection refused".to_string(),
                ))
            })
        });
        let server = ports.server();

        let response = server
            .post("/llm/chat")
            .json(&json!({ "message": "你好" }))
            .await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            response.json::<ApiErrorResponse>(),
            ApiErrorResponse {
                code: "E_SERVICE_UNAVAILABLE".to_string(),
                message: LLM_UNAVAILABLE_MESSAGE.to_string(),
                status: 503,
            }
        );
    }

    #[tokio::test]
    async fn test_chat_rejects_unknown_role() {
        let mut ports = TestPorts::default();
        ports.llm.expect_chat().never();
        let server = ports.server();

        let response = server
            .post("/llm/chat")
            .json(&json!({
                "message": "你好",
                "conversation_history": [{ "role": "system", "content": "x" }]
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<ApiErrorResponse>().message,
            "role must be user or assistant"
        );
    }

    #[tokio::test]
    async fn test_health_reports_unhealthy_instead_of_failing() {
        let mut ports = TestPorts::default();
        ports.llm.expect_health().returning(|| {
            Box::pin(async { Err(CoreError::ServiceUnavailable("timeout".to_string())) })
        });
        let server = ports.server();

        let response = server.get("/llm/health").await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["data"]["status"], "unhealthy");
    }
}
