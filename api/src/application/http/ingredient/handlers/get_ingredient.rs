use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::{AppService, AppState};
use axum::extract::{Path, State};
use foodtrace_core::domain::ingredient::entities::Ingredient;
use foodtrace_core::domain::ingredient::ports::IngredientService;
use foodtrace_core::domain::ingredient::value_objects::GetIngredientInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetIngredientResponse {
    pub data: Ingredient,
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "ingredient",
    summary = "Get ingredient by batch number",
    description = "Looks up a single batch for the public traceability page.",
    params(
        ("id" = String, Path, description = "Batch number", example = "MG20241201-001"),
    ),
    responses(
        (status = 200, body = GetIngredientResponse),
        (status = 404, body = ApiErrorResponse)
    ),
)]
pub async fn get_ingredient<S: AppService>(
    Path(batch_number): Path<String>,
    State(state): State<AppState<S>>,
) -> Result<Response<GetIngredientResponse>, ApiError> {
    let ingredient = state
        .service
        .get_ingredient_by_batch(GetIngredientInput { batch_number })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetIngredientResponse { data: ingredient }))
}
