use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    ingredient::{
        entities::Ingredient,
        value_objects::{
            CreateIngredientInput, DeleteIngredientInput, GetIngredientInput,
            GetIngredientsFilter, UpdateIngredientInput,
        },
    },
};

pub trait IngredientService: Send + Sync {
    fn get_ingredients(
        &self,
        filter: GetIngredientsFilter,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn get_ingredient_by_batch(
        &self,
        input: GetIngredientInput,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn create_ingredient(
        &self,
        identity: Identity,
        input: CreateIngredientInput,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn update_ingredient(
        &self,
        identity: Identity,
        input: UpdateIngredientInput,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn delete_ingredient(
        &self,
        identity: Identity,
        input: DeleteIngredientInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait IngredientRepository: Send + Sync {
    fn fetch_ingredients(
        &self,
        filter: GetIngredientsFilter,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn get_by_batch_number(
        &self,
        batch_number: String,
    ) -> impl Future<Output = Result<Option<Ingredient>, CoreError>> + Send;

    fn get_by_id(
        &self,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<Option<Ingredient>, CoreError>> + Send;

    fn create_ingredient(
        &self,
        ingredient: Ingredient,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn update_ingredient(
        &self,
        ingredient: Ingredient,
    ) -> impl Future<Output = Result<Ingredient, CoreError>> + Send;

    fn delete_ingredient(
        &self,
        ingredient_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn count_ingredients(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

pub trait IngredientPolicy: Send + Sync {
    fn can_manage_ingredients(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
