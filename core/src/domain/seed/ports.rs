use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    seed::value_objects::{AdminSeed, SeedReport},
};

pub trait SeedService: Send + Sync {
    /// Creates the default admin accounts unless the setup flag is already set.
    fn seed_admin_accounts(
        &self,
        admins: Vec<AdminSeed>,
    ) -> impl Future<Output = Result<SeedReport, CoreError>> + Send;

    /// Inserts the sample batches when no ingredient exists yet.
    fn seed_sample_ingredients(&self) -> impl Future<Output = Result<usize, CoreError>> + Send;
}
