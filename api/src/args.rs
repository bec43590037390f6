use std::num::NonZeroU32;

use clap::{Args as ClapArgs, Parser};
use foodtrace_core::domain::{
    common::{AuthConfig, DatabaseConfig, FoodtraceConfig, LLMConfig},
    seed::value_objects::AdminSeed,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "foodtrace-api", version, about = "Food traceability API server")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub admin: AdminArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "PORT", default_value_t = 3000)]
    pub port: u16,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long = "root-path", env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// Requests each client IP may send per minute to the API routes.
    #[arg(
        long = "rate-limit-per-minute",
        env = "RATE_LIMIT_PER_MINUTE",
        default_value = "10"
    )]
    pub rate_limit_per_minute: NonZeroU32,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(
        id = "database_host",
        long = "database-host",
        env = "DATABASE_HOST",
        default_value = "localhost"
    )]
    pub host: String,

    #[arg(
        id = "database_port",
        long = "database-port",
        env = "DATABASE_PORT",
        default_value_t = 5432
    )]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,

    #[arg(
        long = "database-password",
        env = "DATABASE_PASSWORD",
        default_value = "postgres",
        hide_env_values = true
    )]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "foodtrace")]
    pub name: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct AuthArgs {
    #[arg(long = "jwt-secret", env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    /// Access token lifetime in seconds.
    #[arg(long = "jwt-expires-in", env = "JWT_EXPIRES_IN", default_value_t = 3600)]
    pub jwt_expires_in: i64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(
        long = "llm-service-url",
        env = "LLM_SERVICE_INTERNAL_URL",
        default_value = "http://llm-service:8000"
    )]
    pub service_url: String,

    #[arg(long = "llm-timeout-secs", env = "LLM_TIMEOUT_SECS", default_value_t = 120)]
    pub timeout_secs: u64,

    /// Number of past messages forwarded with each chat request.
    #[arg(long = "llm-max-history", env = "LLM_MAX_HISTORY", default_value_t = 10)]
    pub max_history: usize,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct AdminArgs {
    #[arg(long = "admin-account-1", env = "ADMIN_ACCOUNT_1", default_value = "admin001")]
    pub account_1: String,

    #[arg(
        long = "admin-password-1",
        env = "ADMIN_PASSWORD_1",
        default_value = "000000",
        hide_env_values = true
    )]
    pub password_1: String,

    #[arg(long = "admin-account-2", env = "ADMIN_ACCOUNT_2", default_value = "admin002")]
    pub account_2: String,

    #[arg(
        long = "admin-password-2",
        env = "ADMIN_PASSWORD_2",
        default_value = "000000",
        hide_env_values = true
    )]
    pub password_2: String,

    #[arg(long = "admin-account-3", env = "ADMIN_ACCOUNT_3", default_value = "admin003")]
    pub account_3: String,

    #[arg(
        long = "admin-password-3",
        env = "ADMIN_PASSWORD_3",
        default_value = "000000",
        hide_env_values = true
    )]
    pub password_3: String,

    /// Insert the two sample batches when the ingredient table is empty.
    #[arg(long = "seed-sample-ingredients", env = "SEED_SAMPLE_INGREDIENTS")]
    pub seed_sample_ingredients: bool,
}

impl AdminArgs {
    pub fn seeds(&self) -> Vec<AdminSeed> {
        [
            (&self.account_1, &self.password_1),
            (&self.account_2, &self.password_2),
            (&self.account_3, &self.password_3),
        ]
        .into_iter()
        .map(|(account, password)| AdminSeed {
            account: account.clone(),
            password: password.clone(),
        })
        .collect()
    }
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl From<Args> for FoodtraceConfig {
    fn from(args: Args) -> Self {
        FoodtraceConfig {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
            },
            auth: AuthConfig {
                jwt_secret: args.auth.jwt_secret,
                jwt_expires_in: args.auth.jwt_expires_in,
            },
            llm: LLMConfig {
                service_url: args.llm.service_url,
                timeout_secs: args.llm.timeout_secs,
                max_history: args.llm.max_history,
            },
        }
    }
}
