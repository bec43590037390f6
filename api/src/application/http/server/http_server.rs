use std::sync::Arc;

use crate::application::http::authentication::router::authentication_routes;
use crate::application::http::health::router::health_routes;
use crate::application::http::ingredient::router::ingredient_routes;
use crate::application::http::llm::router::llm_routes;
use crate::application::http::server::app_state::{AppService, AppState};
use crate::application::http::server::openapi::ApiDoc;
use crate::application::rate_limit::rate_limit;
use crate::args::Args;

use super::config::get_config;
use anyhow::Context;
use axum::Router;
use axum::middleware;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, LOCATION};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use foodtrace_core::{application::create_service, domain::common::FoodtraceConfig};
use tower_http::cors::CorsLayer;
use tracing::{debug, info_span};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = FoodtraceConfig::from(args.as_ref().clone());
    let service = create_service(config).await?;

    Ok(AppState::new(args, service))
}

fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer, anyhow::Error> {
    let allowed_origins = allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("invalid allowed origin: {origin}"))
        })
        .collect::<Result<Vec<HeaderValue>, _>>()?;

    debug!("Allowed origins: {:?}", allowed_origins);

    Ok(CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::PUT,
            Method::OPTIONS,
        ])
        .allow_origin(allowed_origins)
        .allow_headers([
            AUTHORIZATION,
            CONTENT_TYPE,
            CONTENT_LENGTH,
            ACCEPT,
            LOCATION,
        ])
        .allow_credentials(true))
}

/// Feature routes without docs, metrics or transport layers.
///
/// Ingredient, auth and LLM routes share the per-client rate limit. Health
/// checks are exempt.
pub fn api_routes<S: AppService>(state: AppState<S>) -> Router<AppState<S>> {
    let root_path = state.args.server.root_path.clone();

    let limited = Router::new()
        .merge(ingredient_routes(state.clone()))
        .merge(authentication_routes(state.clone()))
        .merge(llm_routes(&root_path))
        .route_layer(middleware::from_fn_with_state(
            state.rate_limiter.clone(),
            rate_limit,
        ));

    Router::new()
        .route(&format!("{root_path}/config"), get(get_config::<S>))
        .merge(limited)
        .merge(health_routes(&root_path))
}

///  Returns the [`Router`] of this application.
pub fn router<S: AppService>(state: AppState<S>) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let cors = cors_layer(&state.args.server.allowed_origins)?;

    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let root_path = state.args.server.root_path.clone();

    let mut openapi = ApiDoc::openapi();
    openapi.paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{root_path}{path}"), item))
        .collect();

    let api_docs_url = format!("{root_path}/api-docs/openapi.json");

    let router = axum::Router::new()
        .merge(Scalar::with_url(
            format!("{root_path}/scalar"),
            openapi.clone(),
        ))
        .merge(
            SwaggerUi::new(format!("{root_path}/swagger-ui"))
                .url(api_docs_url.clone(), openapi.clone()),
        )
        .merge(Redoc::with_url(format!("{root_path}/redoc"), openapi))
        .merge(RapiDoc::new(api_docs_url).path(format!("{root_path}/rapidoc")))
        .merge(api_routes(state.clone()))
        .route(
            &format!("{root_path}/metrics"),
            get(|| async move { metric_handle.render() }),
        )
        .layer(trace_layer)
        .layer(cors)
        .layer(prometheus_layer)
        .with_state(state);

    Ok(router)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_accepts_valid_origins() {
        let origins = vec![
            "http://localhost:3000".to_string(),
            "https://trace.example.com".to_string(),
        ];

        assert!(cors_layer(&origins).is_ok());
    }

    #[test]
    fn test_cors_rejects_malformed_origin() {
        let origins = vec!["http://bad\norigin".to_string()];

        assert!(cors_layer(&origins).is_err());
    }
}
