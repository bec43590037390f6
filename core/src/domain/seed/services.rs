use tracing::info;

use crate::domain::{
    chat::ports::LlmGateway,
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    ingredient::{
        entities::{Ingredient, IngredientConfig},
        ports::IngredientRepository,
    },
    jwt::ports::TokenIssuer,
    seed::{
        ports::SeedService,
        value_objects::{ADMIN_ACCOUNTS_SETUP_FLAG, AdminSeed, SeedReport, sample_ingredients},
    },
    system_config::{entities::SystemConfig, ports::SystemConfigRepository},
    user::{entities::UserRole, ports::UserRepository, value_objects::CreateUserRequest},
};

impl<I, U, SC, H, T, L, HC> SeedService for Service<I, U, SC, H, T, L, HC>
where
    I: IngredientRepository,
    U: UserRepository,
    SC: SystemConfigRepository,
    H: HasherRepository,
    T: TokenIssuer,
    L: LlmGateway,
    HC: HealthCheckRepository,
{
    async fn seed_admin_accounts(&self, admins: Vec<AdminSeed>) -> Result<SeedReport, CoreError> {
        if self
            .system_config_repository
            .get_by_key(ADMIN_ACCOUNTS_SETUP_FLAG.to_string())
            .await?
            .is_some()
        {
            info!("admin accounts already seeded, skipping");
            return Ok(SeedReport {
                already_completed: true,
                ..Default::default()
            });
        }

        let mut report = SeedReport::default();

        for admin in admins {
            if self
                .user_repository
                .get_by_account(admin.account.clone())
                .await?
                .is_some()
            {
                info!(account = %admin.account, "admin account exists, skipping");
                report.skipped.push(admin.account);
                continue;
            }

            let password_hash = self.hasher_repository.hash_password(admin.password).await?;

            self.user_repository
                .create_user(CreateUserRequest {
                    account: admin.account.clone(),
                    password_hash,
                    role: UserRole::Admin,
                })
                .await?;

            info!(account = %admin.account, "admin account created");
            report.created.push(admin.account);
        }

        self.system_config_repository
            .upsert(SystemConfig::new(ADMIN_ACCOUNTS_SETUP_FLAG, "true"))
            .await?;

        Ok(report)
    }

    async fn seed_sample_ingredients(&self) -> Result<usize, CoreError> {
        if self.ingredient_repository.count_ingredients().await? > 0 {
            info!("ingredients already present, skipping sample data");
            return Ok(0);
        }

        let samples = sample_ingredients()?;
        let total = samples.len();

        for input in samples {
            let ingredient = Ingredient::new(IngredientConfig {
                batch_number: input.batch_number,
                name: input.name,
                origin: input.origin,
                supplier: input.supplier,
                production_date: input.production_date,
                expiry_date: input.expiry_date,
                test_result: input.test_result,
                test_details: input.test_details,
            });

            self.ingredient_repository
                .create_ingredient(ingredient)
                .await?;
        }

        info!(count = total, "sample ingredients seeded");

        Ok(total)
    }
}
