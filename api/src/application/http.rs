pub mod authentication;
pub mod health;
pub mod ingredient;
pub mod llm;
pub mod server;
