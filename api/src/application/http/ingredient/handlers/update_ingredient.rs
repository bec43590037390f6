use crate::application::auth::RequiredIdentity;
use crate::application::http::ingredient::validators::{
    UpdateIngredientValidator, parse_ingredient_id,
};
use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::{AppService, AppState};
use axum::extract::{Path, State};
use foodtrace_core::domain::ingredient::entities::Ingredient;
use foodtrace_core::domain::ingredient::ports::IngredientService;
use foodtrace_core::domain::ingredient::value_objects::UpdateIngredientInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateIngredientResponse {
    pub data: Ingredient,
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "ingredient",
    summary = "Update ingredient",
    description = "Partially updates an ingredient batch. Absent fields are left unchanged.",
    params(
        ("id" = uuid::Uuid, Path, description = "Ingredient ID"),
    ),
    request_body = UpdateIngredientValidator,
    responses(
        (status = 200, body = UpdateIngredientResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 404, body = ApiErrorResponse),
        (status = 409, body = ApiErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn update_ingredient<S: AppService>(
    Path(id): Path<String>,
    State(state): State<AppState<S>>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateIngredientValidator>,
) -> Result<Response<UpdateIngredientResponse>, ApiError> {
    let ingredient_id = parse_ingredient_id(&id)?;

    let ingredient = state
        .service
        .update_ingredient(
            identity,
            UpdateIngredientInput {
                ingredient_id,
                batch_number: payload.batch_number,
                name: payload.name,
                origin: payload.origin,
                supplier: payload.supplier,
                production_date: payload.production_date,
                expiry_date: payload.expiry_date,
                test_result: payload.test_result,
                test_details: payload.test_details,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateIngredientResponse { data: ingredient }))
}
