use super::handlers::create_ingredient::{__path_create_ingredient, create_ingredient};
use super::handlers::delete_ingredient::{__path_delete_ingredient, delete_ingredient};
use super::handlers::get_ingredient::{__path_get_ingredient, get_ingredient};
use super::handlers::get_ingredients::{__path_get_ingredients, get_ingredients};
use super::handlers::update_ingredient::{__path_update_ingredient, update_ingredient};
use crate::application::{
    auth::auth,
    http::server::app_state::{AppService, AppState},
};

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_ingredients,
    get_ingredient,
    create_ingredient,
    update_ingredient,
    delete_ingredient
))]
pub struct IngredientApiDoc;

pub fn ingredient_routes<S: AppService>(state: AppState<S>) -> Router<AppState<S>> {
    let root_path = &state.args.server.root_path;

    // On GET the `{id}` segment carries the batch number.
    let public = Router::new()
        .route(&format!("{root_path}/ingredients"), get(get_ingredients::<S>))
        .route(
            &format!("{root_path}/ingredients/{{id}}"),
            get(get_ingredient::<S>),
        );

    // `route_layer` keeps unknown methods answering 405 instead of 401.
    let admin = Router::new()
        .route(
            &format!("{root_path}/ingredients"),
            post(create_ingredient::<S>),
        )
        .route(
            &format!("{root_path}/ingredients/{{id}}"),
            put(update_ingredient::<S>).delete(delete_ingredient::<S>),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::<S>));

    public.merge(admin)
}
