use std::time::Duration;

use crate::{
    domain::common::{
        FoodtraceConfig,
        services::{ChatSettings, Service},
    },
    infrastructure::{
        crypto::Argon2HasherRepository,
        db::postgres::{Postgres, PostgresConfig},
        health::PostgresHealthCheckRepository,
        ingredient::PostgresIngredientRepository,
        jwt::HmacTokenIssuer,
        llm::LlmServiceClient,
        system_config::repository::PostgresSystemConfigRepository,
        user::repository::PostgresUserRepository,
    },
};

pub type FoodtraceService = Service<
    PostgresIngredientRepository,
    PostgresUserRepository,
    PostgresSystemConfigRepository,
    Argon2HasherRepository,
    HmacTokenIssuer,
    LlmServiceClient,
    PostgresHealthCheckRepository,
>;

pub async fn create_service(config: FoodtraceConfig) -> Result<FoodtraceService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;
    postgres.migrate().await?;

    let llm_gateway = LlmServiceClient::new(
        &config.llm.service_url,
        Duration::from_secs(config.llm.timeout_secs),
    )?;

    Ok(Service::new(
        PostgresIngredientRepository::new(postgres.get_db()),
        PostgresUserRepository::new(postgres.get_db()),
        PostgresSystemConfigRepository::new(postgres.get_db()),
        Argon2HasherRepository::new(),
        HmacTokenIssuer::new(&config.auth.jwt_secret, config.auth.jwt_expires_in),
        llm_gateway,
        PostgresHealthCheckRepository::new(postgres.get_db()),
        ChatSettings {
            max_history: config.llm.max_history,
        },
    ))
}
