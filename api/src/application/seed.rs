use foodtrace_core::domain::seed::ports::SeedService;
use tracing::info;

use crate::application::http::server::app_state::{AppService, AppState};

/// Creates the admin accounts on first boot and, when asked, the sample batches.
pub async fn seed_initial_data<S: AppService>(state: &AppState<S>) -> Result<(), anyhow::Error> {
    let report = state
        .service
        .seed_admin_accounts(state.args.admin.seeds())
        .await?;

    if !report.already_completed {
        info!(
            created = ?report.created,
            skipped = ?report.skipped,
            "admin account setup completed"
        );
    }

    if state.args.admin.seed_sample_ingredients {
        let inserted = state.service.seed_sample_ingredients().await?;
        info!(inserted, "sample ingredient seeding finished");
    }

    Ok(())
}
