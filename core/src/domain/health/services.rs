use crate::domain::{
    chat::ports::LlmGateway,
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    ingredient::ports::IngredientRepository,
    jwt::ports::TokenIssuer,
    system_config::ports::SystemConfigRepository,
    user::ports::UserRepository,
};

impl<I, U, SC, H, T, L, HC> HealthCheckService for Service<I, U, SC, H, T, L, HC>
where
    I: IngredientRepository,
    U: UserRepository,
    SC: SystemConfigRepository,
    H: HasherRepository,
    T: TokenIssuer,
    L: LlmGateway,
    HC: HealthCheckRepository,
{
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readiness().await
    }
}
