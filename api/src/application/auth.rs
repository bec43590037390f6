use axum::{
    RequestPartsExt,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use foodtrace_core::domain::authentication::{
    ports::AuthService,
    value_objects::{AuthorizeRequestInput, Identity},
};
use tracing::debug;

use super::http::server::{
    api_entities::api_error::ApiError,
    app_state::{AppService, AppState},
};

pub async fn extract_token_from_bearer(parts: &mut Parts) -> Result<String, ApiError> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| ApiError::Unauthorized("Token not found".to_string()))?;

    let token = bearer.token();
    if token.is_empty() {
        return Err(ApiError::Unauthorized("Token not found".to_string()));
    }

    Ok(token.to_string())
}

/// Requires a valid bearer token and stores the caller's [`Identity`] on the request.
pub async fn auth<S: AppService>(
    State(state): State<AppState<S>>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let (mut parts, body) = req.into_parts();
    let token = extract_token_from_bearer(&mut parts).await?;

    let output = state
        .service
        .authorize_request(AuthorizeRequestInput { token })
        .await
        .map_err(|e| {
            debug!("rejected bearer token: {}", e);
            ApiError::from(e)
        })?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(output.identity);

    Ok(next.run(req).await)
}

/// Extractor for handlers that sit behind [`auth`].
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(RequiredIdentity)
            .ok_or_else(|| ApiError::Unauthorized("Authentication required".to_string()))
    }
}
