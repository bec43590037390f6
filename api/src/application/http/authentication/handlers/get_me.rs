use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use foodtrace_core::domain::authentication::value_objects::Identity;
use foodtrace_core::domain::user::entities::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetMeResponse {
    pub data: User,
}

#[utoipa::path(
    get,
    path = "/me",
    tag = "auth",
    summary = "Current user",
    responses(
        (status = 200, body = GetMeResponse),
        (status = 401, body = ApiErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn get_me(
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetMeResponse>, ApiError> {
    let Identity::User(user) = identity;

    Ok(Response::OK(GetMeResponse { data: user }))
}
