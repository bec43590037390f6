use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use rand::rngs::OsRng;
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    crypto::{ports::HasherRepository, value_objects::DUMMY_PASSWORD_HASH},
};

#[derive(Debug, Clone, Default)]
pub struct Argon2HasherRepository;

impl Argon2HasherRepository {
    pub fn new() -> Self {
        Self
    }
}

fn hash_blocking(password: &str) -> Result<String, CoreError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            error!("Failed to hash password: {}", e);
            CoreError::InternalServerError
        })
}

fn verify_blocking(password: &str, password_hash: &str) -> Result<bool, CoreError> {
    let parsed = PasswordHash::new(password_hash).map_err(|e| {
        error!("Stored password hash is malformed: {}", e);
        CoreError::InternalServerError
    })?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

impl HasherRepository for Argon2HasherRepository {
    async fn hash_password(&self, password: String) -> Result<String, CoreError> {
        tokio::task::spawn_blocking(move || hash_blocking(&password))
            .await
            .map_err(|e| {
                error!("Password hashing task failed: {}", e);
                CoreError::InternalServerError
            })?
    }

    async fn verify_password(
        &self,
        password: String,
        password_hash: String,
    ) -> Result<bool, CoreError> {
        tokio::task::spawn_blocking(move || verify_blocking(&password, &password_hash))
            .await
            .map_err(|e| {
                error!("Password verification task failed: {}", e);
                CoreError::InternalServerError
            })?
    }
}
