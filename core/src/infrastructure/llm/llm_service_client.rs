use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::error;

use crate::domain::{
    chat::{entities::ChatReply, ports::LlmGateway, value_objects::ChatInput},
    common::entities::app_errors::CoreError,
};

/// HTTP client for the LLM microservice.
#[derive(Debug, Clone)]
pub struct LlmServiceClient {
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct LlmServiceResponse {
    response: String,
    model: String,
}

impl LlmServiceClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(|e| {
                error!("Failed to build LLM HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn chat_url(&self) -> String {
        format!("{}/chat/", self.base_url)
    }

    fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }
}

fn unavailable(context: &str, e: impl std::fmt::Display) -> CoreError {
    error!("{}: {}", context, e);
    CoreError::ServiceUnavailable(format!("{context}: {e}"))
}

impl LlmGateway for LlmServiceClient {
    async fn chat(&self, input: ChatInput) -> Result<ChatReply, CoreError> {
        let response = self
            .client
            .post(self.chat_url())
            .json(&input)
            .send()
            .await
            .map_err(|e| unavailable("LLM service request failed", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(unavailable(
                "LLM service returned error",
                format!("{status} - {error_text}"),
            ));
        }

        let body: LlmServiceResponse = response
            .json()
            .await
            .map_err(|e| unavailable("Failed to parse LLM service response", e))?;

        Ok(ChatReply {
            response: body.response,
            model: body.model,
        })
    }

    async fn health(&self) -> Result<serde_json::Value, CoreError> {
        let response = self
            .client
            .get(self.health_url())
            .send()
            .await
            .map_err(|e| unavailable("LLM health request failed", e))?;

        if !response.status().is_success() {
            return Err(unavailable(
                "LLM health check returned error",
                response.status(),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| unavailable("Failed to parse LLM health response", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_ignore_trailing_slash() {
        let client =
            LlmServiceClient::new("http://llm-service:8000/", Duration::from_secs(1)).unwrap();

        assert_eq!(client.chat_url(), "http://llm-service:8000/chat/");
        assert_eq!(client.health_url(), "http://llm-service:8000/health");
    }

    #[test]
    fn test_chat_body_shape() {
        let input = ChatInput {
            message: "芒果的檢驗結果為何？".to_string(),
            conversation_history: vec![],
        };

        let body = serde_json::to_value(&input).unwrap();

        assert_eq!(body["message"], "芒果的檢驗結果為何？");
        assert!(body["conversation_history"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_service_is_unavailable() {
        let client =
            LlmServiceClient::new("http://127.0.0.1:9", Duration::from_millis(500)).unwrap();

        let result = client
            .chat(ChatInput {
                message: "hi".to_string(),
                conversation_history: vec![],
            })
            .await;

        assert!(matches!(result, Err(CoreError::ServiceUnavailable(_))));
        assert!(matches!(
            client.health().await,
            Err(CoreError::ServiceUnavailable(_))
        ));
    }
}
