use crate::application::http::authentication::validators::LoginValidator;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::{AppService, AppState};
use axum::extract::State;
use foodtrace_core::domain::authentication::ports::AuthService;
use foodtrace_core::domain::authentication::value_objects::{LoginInput, LoginOutput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LoginResponse {
    pub data: LoginOutput,
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    summary = "Log in",
    description = "Exchanges an account and password for a bearer access token.",
    request_body = LoginValidator,
    responses(
        (status = 200, body = LoginResponse),
        (status = 401, body = ApiErrorResponse),
        (status = 429, body = ApiErrorResponse)
    ),
)]
pub async fn login<S: AppService>(
    State(state): State<AppState<S>>,
    ValidateJson(payload): ValidateJson<LoginValidator>,
) -> Result<Response<LoginResponse>, ApiError> {
    let output = state
        .service
        .login(LoginInput {
            account: payload.account,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(LoginResponse { data: output }))
}
