use std::future::Future;

use crate::domain::{
    chat::{entities::ChatReply, value_objects::ChatInput},
    common::entities::app_errors::CoreError,
};

pub trait ChatService: Send + Sync {
    fn chat(&self, input: ChatInput) -> impl Future<Output = Result<ChatReply, CoreError>> + Send;

    /// Health report of the LLM service, or a fallback when it cannot be reached.
    fn llm_health(&self) -> impl Future<Output = serde_json::Value> + Send;
}

/// Client side of the external LLM microservice.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait LlmGateway: Send + Sync {
    fn chat(&self, input: ChatInput) -> impl Future<Output = Result<ChatReply, CoreError>> + Send;

    fn health(&self) -> impl Future<Output = Result<serde_json::Value, CoreError>> + Send;
}
