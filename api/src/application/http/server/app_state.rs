use std::{net::IpAddr, sync::Arc};

use foodtrace_core::{
    application::FoodtraceService,
    domain::{
        authentication::ports::AuthService, chat::ports::ChatService,
        health::ports::HealthCheckService, ingredient::ports::IngredientService,
        seed::ports::SeedService,
    },
};
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};

use crate::args::Args;

/// Everything the handlers need from the domain.
pub trait AppService:
    IngredientService
    + AuthService
    + ChatService
    + HealthCheckService
    + SeedService
    + Clone
    + Send
    + Sync
    + 'static
{
}

impl<T> AppService for T where
    T: IngredientService
        + AuthService
        + ChatService
        + HealthCheckService
        + SeedService
        + Clone
        + Send
        + Sync
        + 'static
{
}

pub type ClientRateLimiter = DefaultKeyedRateLimiter<IpAddr>;

#[derive(Clone)]
pub struct AppState<S = FoodtraceService> {
    pub args: Arc<Args>,
    pub service: S,
    pub rate_limiter: Arc<ClientRateLimiter>,
}

impl<S: AppService> AppState<S> {
    pub fn new(args: Arc<Args>, service: S) -> Self {
        let quota = Quota::per_minute(args.server.rate_limit_per_minute);

        Self {
            args,
            service,
            rate_limiter: Arc::new(RateLimiter::keyed(quota)),
        }
    }
}
