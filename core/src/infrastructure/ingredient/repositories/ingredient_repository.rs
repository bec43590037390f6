use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, SqlErr,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{
        entities::Ingredient, ports::IngredientRepository, value_objects::GetIngredientsFilter,
    },
};
use crate::entity::ingredients::{
    ActiveModel as IngredientActiveModel, Column as IngredientColumn, Entity as IngredientEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresIngredientRepository {
    pub db: DatabaseConnection,
}

impl PostgresIngredientRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn map_write_error(e: DbErr, batch_number: &str) -> CoreError {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = e.sql_err() {
        return CoreError::AlreadyExists(format!(
            "Ingredient with batch number {batch_number} already exists"
        ));
    }

    error!("Failed to write ingredient: {}", e);
    CoreError::InternalServerError
}

impl IngredientRepository for PostgresIngredientRepository {
    async fn fetch_ingredients(
        &self,
        filter: GetIngredientsFilter,
    ) -> Result<Vec<Ingredient>, CoreError> {
        let mut query = IngredientEntity::find();

        if let Some(name) = filter.name {
            query = query.filter(IngredientColumn::Name.eq(name));
        }

        if let Some(supplier) = filter.supplier {
            query = query.filter(IngredientColumn::Supplier.eq(supplier));
        }

        if let Some(test_result) = filter.test_result {
            query = query.filter(IngredientColumn::TestResult.eq(test_result));
        }

        query = query.order_by_desc(IngredientColumn::CreatedAt);

        if let Some(limit) = filter.limit {
            query = query.limit(limit as u64);
        }

        if let Some(offset) = filter.offset {
            query = query.offset(offset as u64);
        }

        let ingredients = query
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch ingredients: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Ingredient::from)
            .collect::<Vec<Ingredient>>();

        Ok(ingredients)
    }

    async fn get_by_batch_number(
        &self,
        batch_number: String,
    ) -> Result<Option<Ingredient>, CoreError> {
        let ingredient = IngredientEntity::find()
            .filter(IngredientColumn::BatchNumber.eq(batch_number))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get ingredient by batch number: {}", e);
                CoreError::InternalServerError
            })?
            .map(Ingredient::from);

        Ok(ingredient)
    }

    async fn get_by_id(&self, ingredient_id: Uuid) -> Result<Option<Ingredient>, CoreError> {
        let ingredient = IngredientEntity::find_by_id(ingredient_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get ingredient by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Ingredient::from);

        Ok(ingredient)
    }

    async fn create_ingredient(&self, ingredient: Ingredient) -> Result<Ingredient, CoreError> {
        let batch_number = ingredient.batch_number.clone();

        IngredientEntity::insert(IngredientActiveModel::from(ingredient))
            .exec_with_returning(&self.db)
            .await
            .map(Ingredient::from)
            .map_err(|e| map_write_error(e, &batch_number))
    }

    async fn update_ingredient(&self, ingredient: Ingredient) -> Result<Ingredient, CoreError> {
        let batch_number = ingredient.batch_number.clone();
        let ingredient_id = ingredient.id;

        IngredientEntity::update(IngredientActiveModel::from(ingredient))
            .filter(IngredientColumn::Id.eq(ingredient_id))
            .exec(&self.db)
            .await
            .map(Ingredient::from)
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => CoreError::NotFound(format!(
                    "Ingredient with ID {ingredient_id} not found"
                )),
                e => map_write_error(e, &batch_number),
            })
    }

    async fn delete_ingredient(&self, ingredient_id: Uuid) -> Result<(), CoreError> {
        let result = IngredientEntity::delete_by_id(ingredient_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete ingredient: {}", e);
                CoreError::InternalServerError
            })?;

        if result.rows_affected == 0 {
            return Err(CoreError::NotFound(format!(
                "Ingredient with ID {ingredient_id} not found"
            )));
        }

        Ok(())
    }

    async fn count_ingredients(&self) -> Result<u64, CoreError> {
        IngredientEntity::find().count(&self.db).await.map_err(|e| {
            error!("Failed to count ingredients: {}", e);
            CoreError::InternalServerError
        })
    }
}
