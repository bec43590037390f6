pub mod llm_service_client;

pub use llm_service_client::LlmServiceClient;
