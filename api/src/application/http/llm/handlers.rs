pub mod chat;
pub mod llm_health;
