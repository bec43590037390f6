use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, QueryParams,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::{AppService, AppState};
use axum::extract::State;
use foodtrace_core::domain::ingredient::entities::Ingredient;
use foodtrace_core::domain::ingredient::ports::IngredientService;
use foodtrace_core::domain::ingredient::value_objects::GetIngredientsFilter;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct GetIngredientsQuery {
    pub name: Option<String>,
    pub supplier: Option<String>,
    pub test_result: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetIngredientsResponse {
    pub data: Vec<Ingredient>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "ingredient",
    summary = "List ingredients",
    description = "Lists ingredient batches, newest first. Filters match exactly.",
    params(GetIngredientsQuery),
    responses(
        (status = 200, body = GetIngredientsResponse),
        (status = 400, body = ApiErrorResponse)
    ),
)]
pub async fn get_ingredients<S: AppService>(
    QueryParams(query): QueryParams<GetIngredientsQuery>,
    State(state): State<AppState<S>>,
) -> Result<Response<GetIngredientsResponse>, ApiError> {
    let ingredients = state
        .service
        .get_ingredients(GetIngredientsFilter {
            name: query.name,
            supplier: query.supplier,
            test_result: query.test_result,
            limit: query.limit,
            offset: query.offset,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetIngredientsResponse { data: ingredients }))
}
