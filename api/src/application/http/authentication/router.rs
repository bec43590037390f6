use super::handlers::get_me::{__path_get_me, get_me};
use super::handlers::login::{__path_login, login};
use crate::application::{
    auth::auth,
    http::server::app_state::{AppService, AppState},
};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(login, get_me))]
pub struct AuthenticationApiDoc;

pub fn authentication_routes<S: AppService>(state: AppState<S>) -> Router<AppState<S>> {
    let root_path = &state.args.server.root_path;

    let protected = Router::new()
        .route(&format!("{root_path}/auth/me"), get(get_me))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::<S>));

    Router::new()
        .route(&format!("{root_path}/auth/login"), post(login::<S>))
        .merge(protected)
}
