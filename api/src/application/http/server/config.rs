use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{
    api_entities::response::Response,
    app_state::{AppService, AppState},
};

/// Public, non secret view of the running configuration.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub app_version: String,
    pub root_path: String,
    pub llm_max_history: usize,
    pub llm_timeout_secs: u64,
}

#[utoipa::path(
    get,
    path = "/config",
    tag = "config",
    summary = "Get server configuration",
    responses(
        (status = 200, body = ConfigResponse)
    )
)]
pub async fn get_config<S: AppService>(
    State(state): State<AppState<S>>,
) -> Response<ConfigResponse> {
    Response::OK(ConfigResponse {
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        root_path: state.args.server.root_path.clone(),
        llm_max_history: state.args.llm.max_history,
        llm_timeout_secs: state.args.llm.timeout_secs,
    })
}
