use crate::application::http::{
    authentication::router::AuthenticationApiDoc, health::router::HealthApiDoc,
    ingredient::router::IngredientApiDoc, llm::router::LlmApiDoc,
};
use super::config::__path_get_config;
use utoipa::{
    Modify, OpenApi,
    openapi::{
        Components,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi
            .components
            .get_or_insert_with(Components::new)
            .add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Foodtrace API"
    ),
    paths(get_config),
    modifiers(&BearerSecurity),
    nest(
        (path = "/ingredients", api = IngredientApiDoc),
        (path = "/auth", api = AuthenticationApiDoc),
        (path = "/llm", api = LlmApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/config",
            "/ingredients",
            "/ingredients/{id}",
            "/auth/login",
            "/auth/me",
            "/llm/chat",
            "/llm/health",
            "/health/live",
            "/health/ready",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }

        assert!(
            doc.components
                .as_ref()
                .is_some_and(|c| c.security_schemes.contains_key("bearer"))
        );
    }
}
