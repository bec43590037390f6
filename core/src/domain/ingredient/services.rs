use tracing::{info, instrument};

use crate::domain::{
    authentication::value_objects::Identity,
    chat::ports::LlmGateway,
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    ingredient::{
        entities::{Ingredient, IngredientChanges, IngredientConfig},
        ports::{IngredientPolicy, IngredientRepository, IngredientService},
        value_objects::{
            CreateIngredientInput, DeleteIngredientInput, GetIngredientInput,
            GetIngredientsFilter, UpdateIngredientInput,
        },
    },
    jwt::ports::TokenIssuer,
    system_config::ports::SystemConfigRepository,
    user::ports::UserRepository,
};

fn batch_conflict(batch_number: &str) -> CoreError {
    CoreError::AlreadyExists(format!(
        "Ingredient with batch number {batch_number} already exists"
    ))
}

fn ingredient_not_found(ingredient_id: impl std::fmt::Display) -> CoreError {
    CoreError::NotFound(format!("Ingredient with ID {ingredient_id} not found"))
}

impl<I, U, SC, H, T, L, HC> IngredientService for Service<I, U, SC, H, T, L, HC>
where
    I: IngredientRepository,
    U: UserRepository,
    SC: SystemConfigRepository,
    H: HasherRepository,
    T: TokenIssuer,
    L: LlmGateway,
    HC: HealthCheckRepository,
{
    async fn get_ingredients(
        &self,
        filter: GetIngredientsFilter,
    ) -> Result<Vec<Ingredient>, CoreError> {
        self.ingredient_repository.fetch_ingredients(filter).await
    }

    async fn get_ingredient_by_batch(
        &self,
        input: GetIngredientInput,
    ) -> Result<Ingredient, CoreError> {
        self.ingredient_repository
            .get_by_batch_number(input.batch_number.clone())
            .await?
            .ok_or_else(|| {
                CoreError::NotFound(format!(
                    "Ingredient with batch number {} not found",
                    input.batch_number
                ))
            })
    }

    #[instrument(
        skip(self, identity, input),
        fields(account = %identity.account(), batch_number = %input.batch_number)
    )]
    async fn create_ingredient(
        &self,
        identity: Identity,
        input: CreateIngredientInput,
    ) -> Result<Ingredient, CoreError> {
        ensure_policy(
            self.policy.can_manage_ingredients(identity).await,
            "insufficient permissions",
        )?;

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
        ingredient.ensure_valid_shelf_life()?;

        if self
            .ingredient_repository
            .get_by_batch_number(ingredient.batch_number.clone())
            .await?
            .is_some()
        {
            return Err(batch_conflict(&ingredient.batch_number));
        }

        let created = self
            .ingredient_repository
            .create_ingredient(ingredient)
            .await?;

        info!(ingredient_id = %created.id, "ingredient created");

        Ok(created)
    }

    #[instrument(
        skip(self, identity, input),
        fields(account = %identity.account(), ingredient_id = %input.ingredient_id)
    )]
    async fn update_ingredient(
        &self,
        identity: Identity,
        input: UpdateIngredientInput,
    ) -> Result<Ingredient, CoreError> {
        ensure_policy(
            self.policy.can_manage_ingredients(identity).await,
            "insufficient permissions",
        )?;

        let mut ingredient = self
            .ingredient_repository
            .get_by_id(input.ingredient_id)
            .await?
            .ok_or_else(|| ingredient_not_found(input.ingredient_id))?;

        if let Some(batch_number) = &input.batch_number
            && batch_number != &ingredient.batch_number
            && let Some(owner) = self
                .ingredient_repository
                .get_by_batch_number(batch_number.clone())
                .await?
            && owner.id != ingredient.id
        {
            return Err(batch_conflict(batch_number));
        }

        ingredient.update(IngredientChanges {
            batch_number: input.batch_number,
            name: input.name,
            origin: input.origin,
            supplier: input.supplier,
            production_date: input.production_date,
            expiry_date: input.expiry_date,
            test_result: input.test_result,
            test_details: input.test_details,
        });
        ingredient.ensure_valid_shelf_life()?;

        self.ingredient_repository
            .update_ingredient(ingredient)
            .await
    }

    #[instrument(
        skip(self, identity, input),
        fields(account = %identity.account(), ingredient_id = %input.ingredient_id)
    )]
    async fn delete_ingredient(
        &self,
        identity: Identity,
        input: DeleteIngredientInput,
    ) -> Result<(), CoreError> {
        ensure_policy(
            self.policy.can_manage_ingredients(identity).await,
            "insufficient permissions",
        )?;

        if self
            .ingredient_repository
            .get_by_id(input.ingredient_id)
            .await?
            .is_none()
        {
            return Err(ingredient_not_found(input.ingredient_id));
        }

        self.ingredient_repository
            .delete_ingredient(input.ingredient_id)
            .await?;

        info!("ingredient deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        common::services::test_support::{MockPorts, identity_for},
        user::entities::UserRole,
    };

    fn create_input() -> CreateIngredientInput {
        CreateIngredientInput {
            batch_number: "BA20241202-002".to_string(),
            name: "香蕉".to_string(),
            origin: "高雄旗山".to_string(),
            supplier: "旗山農會".to_string(),
            production_date: Utc.with_ymd_and_hms(2024, 12, 2, 0, 0, 0).unwrap(),
            expiry_date: Utc.with_ymd_and_hms(2024, 12, 10, 0, 0, 0).unwrap(),
            test_result: "合格".to_string(),
            test_details: Some(json!({ "pesticide": "未檢出" })),
        }
    }

    fn stored_banana() -> Ingredient {
        let input = create_input();
        Ingredient::new(IngredientConfig {
            batch_number: input.batch_number,
            name: input.name,
            origin: input.origin,
            supplier: input.supplier,
            production_date: input.production_date,
            expiry_date: input.expiry_date,
            test_result: input.test_result,
            test_details: input.test_details,
        })
    }

    fn update_input(ingredient_id: Uuid) -> UpdateIngredientInput {
        UpdateIngredientInput {
            ingredient_id,
            batch_number: None,
            name: None,
            origin: None,
            supplier: None,
            production_date: None,
            expiry_date: None,
            test_result: None,
            test_details: None,
        }
    }

    #[tokio::test]
    async fn test_admin_creates_ingredient() {
        let mut ports = MockPorts::default();
        let identity = identity_for(&mut ports.users, UserRole::Admin);
        ports
            .ingredients
            .expect_get_by_batch_number()
            .withf(|batch| batch == "BA20241202-002")
            .returning(|_| Box::pin(async { Ok(None) }));
        ports
            .ingredients
            .expect_create_ingredient()
            .times(1)
            .returning(|ingredient| Box::pin(async move { Ok(ingredient) }));
        let service = ports.build();

        let created = service
            .create_ingredient(identity, create_input())
            .await
            .unwrap();

        assert_eq!(created.batch_number, "BA20241202-002");
        assert_eq!(created.test_details, Some(json!({ "pesticide": "未檢出" })));
    }

    #[tokio::test]
    async fn test_non_admin_cannot_create() {
        let mut ports = MockPorts::default();
        let identity = identity_for(&mut ports.users, UserRole::User);
        ports.ingredients.expect_create_ingredient().never();
        let service = ports.build();

        let result = service.create_ingredient(identity, create_input()).await;

        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_duplicate_batch_number_conflicts() {
        let mut ports = MockPorts::default();
        let identity = identity_for(&mut ports.users, UserRole::Admin);
        ports
            .ingredients
            .expect_get_by_batch_number()
            .returning(|_| Box::pin(async { Ok(Some(stored_banana())) }));
        ports.ingredients.expect_create_ingredient().never();
        let service = ports.build();

        let result = service.create_ingredient(identity, create_input()).await;

        assert_eq!(
            result,
            Err(CoreError::AlreadyExists(
                "Ingredient with batch number BA20241202-002 already exists".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_create_rejects_expiry_before_production() {
        let mut ports = MockPorts::default();
        let identity = identity_for(&mut ports.users, UserRole::Admin);
        ports.ingredients.expect_create_ingredient().never();
        let service = ports.build();

        let mut input = create_input();
        input.expiry_date = Utc.with_ymd_and_hms(2024, 12, 1, 0, 0, 0).unwrap();

        let result = service.create_ingredient(identity, input).await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn test_get_by_batch_not_found_message() {
        let mut ports = MockPorts::default();
        ports
            .ingredients
            .expect_get_by_batch_number()
            .returning(|_| Box::pin(async { Ok(None) }));
        let service = ports.build();

        let result = service
            .get_ingredient_by_batch(GetIngredientInput {
                batch_number: "NOPE-001".to_string(),
            })
            .await;

        assert_eq!(
            result,
            Err(CoreError::NotFound(
                "Ingredient with batch number NOPE-001 not found".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let mut ports = MockPorts::default();
        let identity = identity_for(&mut ports.users, UserRole::Admin);
        ports
            .ingredients
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));
        let service = ports.build();

        let id = Uuid::new_v4();
        let result = service.update_ingredient(identity, update_input(id)).await;

        assert_eq!(
            result,
            Err(CoreError::NotFound(format!(
                "Ingredient with ID {id} not found"
            )))
        );
    }

    #[tokio::test]
    async fn test_update_merges_partial_fields() {
        let mut ports = MockPorts::default();
        let identity = identity_for(&mut ports.users, UserRole::Admin);
        let existing = stored_banana();
        let id = existing.id;
        ports.ingredients.expect_get_by_id().returning(move |_| {
            let existing = existing.clone();
            Box::pin(async move { Ok(Some(existing)) })
        });
        ports
            .ingredients
            .expect_update_ingredient()
            .times(1)
            .returning(|ingredient| Box::pin(async move { Ok(ingredient) }));
        let service = ports.build();

        let mut input = update_input(id);
        input.test_result = Some("不合格".to_string());

        let updated = service.update_ingredient(identity, input).await.unwrap();

        assert_eq!(updated.test_result, "不合格");
        assert_eq!(updated.name, "香蕉");
        assert_eq!(updated.batch_number, "BA20241202-002");
    }

    #[tokio::test]
    async fn test_update_to_taken_batch_number_conflicts() {
        let mut ports = MockPorts::default();
        let identity = identity_for(&mut ports.users, UserRole::Admin);
        let existing = stored_banana();
        let id = existing.id;
        ports.ingredients.expect_get_by_id().returning(move |_| {
            let existing = existing.clone();
            Box::pin(async move { Ok(Some(existing)) })
        });
        ports
            .ingredients
            .expect_get_by_batch_number()
            .returning(|_| Box::pin(async { Ok(Some(stored_banana())) }));
        ports.ingredients.expect_update_ingredient().never();
        let service = ports.build();

        let mut input = update_input(id);
        input.batch_number = Some("MG20241201-001".to_string());

        let result = service.update_ingredient(identity, input).await;

        assert!(matches!(result, Err(CoreError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found() {
        let mut ports = MockPorts::default();
        let identity = identity_for(&mut ports.users, UserRole::Admin);
        ports
            .ingredients
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));
        ports.ingredients.expect_delete_ingredient().never();
        let service = ports.build();

        let result = service
            .delete_ingredient(
                identity,
                DeleteIngredientInput {
                    ingredient_id: Uuid::new_v4(),
                },
            )
            .await;

        assert!(matches!(result, Err(CoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_existing_ingredient() {
        let mut ports = MockPorts::default();
        let identity = identity_for(&mut ports.users, UserRole::Admin);
        let existing = stored_banana();
        let id = existing.id;
        ports.ingredients.expect_get_by_id().returning(move |_| {
            let existing = existing.clone();
            Box::pin(async move { Ok(Some(existing)) })
        });
        ports
            .ingredients
            .expect_delete_ingredient()
            .withf(move |ingredient_id| *ingredient_id == id)
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));
        let service = ports.build();

        let result = service
            .delete_ingredient(identity, DeleteIngredientInput { ingredient_id: id })
            .await;

        assert!(result.is_ok());
    }
}
