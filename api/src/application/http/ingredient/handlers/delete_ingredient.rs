use crate::application::auth::RequiredIdentity;
use crate::application::http::ingredient::validators::parse_ingredient_id;
use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::{AppService, AppState};
use axum::extract::{Path, State};
use foodtrace_core::domain::ingredient::ports::IngredientService;
use foodtrace_core::domain::ingredient::value_objects::DeleteIngredientInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteIngredientResponse {
    pub data: DeletedIngredient,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeletedIngredient {
    #[schema(example = "Ingredient deleted successfully")]
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "ingredient",
    summary = "Delete ingredient",
    description = "Permanently removes an ingredient batch.",
    params(
        ("id" = uuid::Uuid, Path, description = "Ingredient ID"),
    ),
    responses(
        (status = 200, body = DeleteIngredientResponse),
        (status = 404, body = ApiErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn delete_ingredient<S: AppService>(
    Path(id): Path<String>,
    State(state): State<AppState<S>>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<DeleteIngredientResponse>, ApiError> {
    let ingredient_id = parse_ingredient_id(&id)?;

    state
        .service
        .delete_ingredient(identity, DeleteIngredientInput { ingredient_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteIngredientResponse {
        data: DeletedIngredient {
            message: "Ingredient deleted successfully".to_string(),
        },
    }))
}
