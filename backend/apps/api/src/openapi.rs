//! OpenAPI document served under `/documentation`.

use auth::domain::value_object::profile_field::{
    Accomplishment, Diet, Gender, Goal, Limitation, WorkoutPeriods, YesNo,
};
use auth::models::{
    AuthResponse, ErrorResponse, LoginRequest, ProfileDetails, ProfilePatch, ProfileResponse,
    RegisterRequest,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::routes::{self, AnalyzeUpload, PingResponse, StatusResponse};

/// Mount point of the Swagger UI
pub const DOCS_PATH: &str = "/documentation";
/// Raw OpenAPI JSON
pub const DOCS_JSON_PATH: &str = "/openapi.json";

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::status,
        routes::ping,
        routes::analyze,
        auth::presentation::handlers::register,
        auth::presentation::handlers::login,
        auth::presentation::handlers::get_profile,
        auth::presentation::handlers::update_profile,
        auth::presentation::handlers::delete_account,
    ),
    components(
        schemas(
            StatusResponse, PingResponse, AnalyzeUpload,
            RegisterRequest, LoginRequest, AuthResponse,
            ProfileDetails, ProfilePatch, ProfileResponse,
            Gender, WorkoutPeriods, YesNo, Goal, Limitation, Diet, Accomplishment,
            ErrorResponse,
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "status", description = "Liveness endpoints"),
        (name = "auth", description = "Registration and login"),
        (name = "user", description = "The caller's own profile"),
        (name = "analyze", description = "Food photo analysis")
    ),
    info(
        title = "Kalorie AI API",
        description = "Calorie tracking backend: accounts, profiles and food photo analysis"
    )
)]
pub struct ApiDoc;

/// Registers the `bearer` scheme referenced by the authenticated routes.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for path in ["/", "/ping", "/analyze", "/auth/register", "/auth/login", "/user"] {
            assert!(paths.contains(&path), "{path} missing from {paths:?}");
        }
        assert!(
            doc.components
                .as_ref()
                .is_some_and(|c| c.security_schemes.contains_key("bearer"))
        );
    }

    #[test]
    fn test_profile_schema_keeps_wire_names() {
        let json = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let details = &json["components"]["schemas"]["ProfileDetails"]["properties"];
        assert!(details.get("desited_weight").is_some());
        assert!(details.get("desired_weight").is_none());
    }
}
