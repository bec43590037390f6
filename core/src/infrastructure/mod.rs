pub mod crypto;
pub mod db;
pub mod health;
pub mod ingredient;
pub mod jwt;
pub mod llm;
pub mod system_config;
pub mod user;
