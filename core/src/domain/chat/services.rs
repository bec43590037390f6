use serde_json::json;
use tracing::{error, instrument};

use crate::domain::{
    chat::{
        entities::{ChatReply, LLM_UNAVAILABLE_MESSAGE},
        ports::{ChatService, LlmGateway},
        value_objects::ChatInput,
    },
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    ingredient::ports::IngredientRepository,
    jwt::ports::TokenIssuer,
    system_config::ports::SystemConfigRepository,
    user::ports::UserRepository,
};

impl<I, U, SC, H, T, L, HC> ChatService for Service<I, U, SC, H, T, L, HC>
where
    I: IngredientRepository,
    U: UserRepository,
    SC: SystemConfigRepository,
    H: HasherRepository,
    T: TokenIssuer,
    L: LlmGateway,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self, input), fields(history = input.conversation_history.len()))]
    async fn chat(&self, mut input: ChatInput) -> Result<ChatReply, CoreError> {
        input.truncate_history(self.chat_settings.max_history);

        self.llm_gateway.chat(input).await.map_err(|e| {
            error!("LLM service error: {}", e);
            CoreError::ServiceUnavailable(LLM_UNAVAILABLE_MESSAGE.to_string())
        })
    }

    async fn llm_health(&self) -> serde_json::Value {
        match self.llm_gateway.health().await {
            Ok(report) => report,
            Err(e) => {
                error!("LLM health check failed: {}", e);
                json!({
                    "status": "unhealthy",
                    "message": "Cannot connect to LLM service",
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        chat::entities::{ChatMessage, ChatRole},
        common::services::{ChatSettings, test_support::MockPorts},
    };

    fn history(len: usize) -> Vec<ChatMessage> {
        (0..len)
            .map(|i| ChatMessage {
                role: if i % 2 == 0 {
                    ChatRole::User
                } else {
                    ChatRole::Assistant
                },
                content: format!("message {i}"),
            })
            .collect()
    }

    #[test]
    fn test_truncate_history_keeps_most_recent() {
        let mut input = ChatInput {
            message: "芒果的檢驗結果為何？".to_string(),
            conversation_history: history(8),
        };

        input.truncate_history(3);

        let contents: Vec<&str> = input
            .conversation_history
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, vec!["message 5", "message 6", "message 7"]);

        input.truncate_history(10);
        assert_eq!(input.conversation_history.len(), 3);
    }

    #[tokio::test]
    async fn test_chat_forwards_trimmed_history() {
        let mut ports = MockPorts::default();
        ports.chat_settings = ChatSettings { max_history: 2 };
        ports
            .llm
            .expect_chat()
            .withf(|input| {
                input.message == "有哪些食材？"
                    && input.conversation_history.len() == 2
                    && input.conversation_history[1].content == "message 5"
            })
            .returning(|_| {
                Box::pin(async {
                    Ok(ChatReply {
                        response: "目前有以下食材".to_string(),
                        model: "llama2".to_string(),
                    })
                })
            });
        let service = ports.build();

        let reply = service
            .chat(ChatInput {
                message: "有哪些食材？".to_string(),
                conversation_history: history(6),
            })
            .await
            .unwrap();

        assert_eq!(reply.model, "llama2");
    }

    #[tokio::test]
    async fn test_chat_failure_becomes_generic_unavailable() {
        let mut ports = MockPorts::default();
        ports.llm.expect_chat().returning(|_| {
            Box::pin(async {
                Err(CoreError::ServiceUnavailable(
                    "connection refused (os error 111)".to_string(),
                ))
            })
        });
        let service = ports.build();

        let result = service
            .chat(ChatInput {
                message: "hi".to_string(),
                conversation_history: vec![],
            })
            .await;

        assert_eq!(
            result,
            Err(CoreError::ServiceUnavailable(
                LLM_UNAVAILABLE_MESSAGE.to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_llm_health_falls_back_when_unreachable() {
        let mut ports = MockPorts::default();
        ports
            .llm
            .expect_health()
            .returning(|| Box::pin(async { Err(CoreError::InternalServerError) }));
        let service = ports.build();

        let report = service.llm_health().await;

        assert_eq!(report["status"], "unhealthy");
        assert_eq!(report["message"], "Cannot connect to LLM service");
    }

    #[tokio::test]
    async fn test_llm_health_relays_report() {
        let mut ports = MockPorts::default();
        ports.llm.expect_health().returning(|| {
            Box::pin(async { Ok(json!({ "status": "healthy", "ollama_connected": true })) })
        });
        let service = ports.build();

        let report = service.llm_health().await;

        assert_eq!(report["status"], "healthy");
        assert_eq!(report["ollama_connected"], true);
    }
}
