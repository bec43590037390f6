use std::sync::Arc;

use crate::domain::common::policies::FoodtracePolicy;

#[derive(Debug, Clone, Copy)]
pub struct ChatSettings {
    pub max_history: usize,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self { max_history: 10 }
    }
}

/// Aggregates every port the domain services need.
pub struct Service<I, U, SC, H, T, L, HC> {
    pub(crate) ingredient_repository: Arc<I>,
    pub(crate) user_repository: Arc<U>,
    pub(crate) system_config_repository: Arc<SC>,
    pub(crate) hasher_repository: Arc<H>,
    pub(crate) token_issuer: Arc<T>,
    pub(crate) llm_gateway: Arc<L>,
    pub(crate) health_check_repository: Arc<HC>,
    pub(crate) policy: Arc<FoodtracePolicy<U>>,
    pub(crate) chat_settings: ChatSettings,
}

impl<I, U, SC, H, T, L, HC> Service<I, U, SC, H, T, L, HC> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        ingredient_repository: I,
        user_repository: U,
        system_config_repository: SC,
        hasher_repository: H,
        token_issuer: T,
        llm_gateway: L,
        health_check_repository: HC,
        chat_settings: ChatSettings,
    ) -> Self {
        let user_repository = Arc::new(user_repository);
        let policy = Arc::new(FoodtracePolicy::new(user_repository.clone()));

        Self {
            ingredient_repository: Arc::new(ingredient_repository),
            user_repository,
            system_config_repository: Arc::new(system_config_repository),
            hasher_repository: Arc::new(hasher_repository),
            token_issuer: Arc::new(token_issuer),
            llm_gateway: Arc::new(llm_gateway),
            health_check_repository: Arc::new(health_check_repository),
            policy,
            chat_settings,
        }
    }
}

impl<I, U, SC, H, T, L, HC> Clone for Service<I, U, SC, H, T, L, HC> {
    fn clone(&self) -> Self {
        Self {
            ingredient_repository: self.ingredient_repository.clone(),
            user_repository: self.user_repository.clone(),
            system_config_repository: self.system_config_repository.clone(),
            hasher_repository: self.hasher_repository.clone(),
            token_issuer: self.token_issuer.clone(),
            llm_gateway: self.llm_gateway.clone(),
            health_check_repository: self.health_check_repository.clone(),
            policy: self.policy.clone(),
            chat_settings: self.chat_settings,
        }
    }
}
