pub mod authentication;
pub mod chat;
pub mod common;
pub mod crypto;
pub mod health;
pub mod ingredient;
pub mod jwt;
pub mod seed;
pub mod system_config;
pub mod user;
