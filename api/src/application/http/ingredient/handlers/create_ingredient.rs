use crate::application::auth::RequiredIdentity;
use crate::application::http::ingredient::validators::CreateIngredientValidator;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::{AppService, AppState};
use axum::extract::State;
use foodtrace_core::domain::ingredient::entities::Ingredient;
use foodtrace_core::domain::ingredient::ports::IngredientService;
use foodtrace_core::domain::ingredient::value_objects::CreateIngredientInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateIngredientResponse {
    pub data: Ingredient,
}

#[utoipa::path(
    post,
    path = "",
    tag = "ingredient",
    summary = "Create ingredient",
    description = "Registers a new ingredient batch. Requires an ADMIN token.",
    request_body = CreateIngredientValidator,
    responses(
        (status = 201, body = CreateIngredientResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 401, body = ApiErrorResponse),
        (status = 403, body = ApiErrorResponse),
        (status = 409, body = ApiErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn create_ingredient<S: AppService>(
    State(state): State<AppState<S>>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateIngredientValidator>,
) -> Result<Response<CreateIngredientResponse>, ApiError> {
    let ingredient = state
        .service
        .create_ingredient(
            identity,
            CreateIngredientInput {
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

    Ok(Response::Created(CreateIngredientResponse { data: ingredient }))
}
