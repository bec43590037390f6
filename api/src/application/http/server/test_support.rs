use std::sync::Arc;

use axum_test::TestServer;
use clap::Parser;
use foodtrace_core::{
    domain::{
        chat::ports::MockLlmGateway,
        common::services::{ChatSettings, Service},
        crypto::ports::MockHasherRepository,
        health::ports::MockHealthCheckRepository,
        ingredient::ports::MockIngredientRepository,
        jwt::ports::TokenIssuer,
        system_config::ports::MockSystemConfigRepository,
        user::{
            entities::{User, UserRole},
            ports::MockUserRepository,
        },
    },
    infrastructure::jwt::hmac_token_issuer::HmacTokenIssuer,
};

use super::{app_state::AppState, http_server::api_routes};
use crate::args::Args;

const TEST_SECRET: &str = "http-test-secret";

pub type TestService = Service<
    MockIngredientRepository,
    MockUserRepository,
    MockSystemConfigRepository,
    MockHasherRepository,
    HmacTokenIssuer,
    MockLlmGateway,
    MockHealthCheckRepository,
>;

/// Mocked repositories behind a real token issuer, so bearer tokens go through
/// the same verification as in production.
#[derive(Default)]
pub struct TestPorts {
    pub ingredients: MockIngredientRepository,
    pub users: MockUserRepository,
    pub system_configs: MockSystemConfigRepository,
    pub hasher: MockHasherRepository,
    pub llm: MockLlmGateway,
    pub health: MockHealthCheckRepository,
}

impl TestPorts {
    /// Lets token checks and permission lookups resolve these accounts by id.
    pub fn with_users(mut self, known: Vec<User>) -> Self {
        self.users.expect_get_by_id().returning(move |id| {
            let found = known.iter().find(|user| user.id == id).cloned();
            Box::pin(async move { Ok(found) })
        });
        self
    }

    pub fn state(self, extra_args: &[&str]) -> AppState<TestService> {
        let mut argv = vec!["foodtrace-api", "--jwt-secret", TEST_SECRET];
        argv.extend_from_slice(extra_args);
        let args = Arc::new(Args::try_parse_from(argv).unwrap());

        let service = Service::new(
            self.ingredients,
            self.users,
            self.system_configs,
            self.hasher,
            HmacTokenIssuer::new(TEST_SECRET, 3600),
            self.llm,
            self.health,
            ChatSettings::default(),
        );

        AppState::new(args, service)
    }

    pub fn server(self) -> TestServer {
        let state = self.state(&[]);
        TestServer::new(api_routes(state.clone()).with_state(state)).unwrap()
    }
}

pub fn account(name: &str, role: UserRole) -> User {
    User::new(name.to_string(), "$argon2id$stored".to_string(), role)
}

pub fn token_for(user: &User) -> String {
    HmacTokenIssuer::new(TEST_SECRET, 3600)
        .issue(user.clone())
        .unwrap()
        .token
}
