//! API Routes
//!
//! Server status, food image analysis, generated documentation, and the
//! auth/user routers mounted under their prefixes. Every route is registered
//! with its gate options.

use auth::domain::repository::{ProfileRepository, TokenRepository, UserRepository};
use auth::{AuthGate, AuthenticatedUser, RouteOptions, auth_router, user_router};
use axum::extract::DefaultBodyLimit;
use axum::extract::multipart::{Multipart, MultipartRejection};
use axum::{
    Json, Router,
    routing::{get, post},
};
use kernel::error::app_error::{AppError, AppResult};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use crate::openapi::{ApiDoc, DOCS_JSON_PATH, DOCS_PATH};

pub const APP_NAME: &str = "Kalorie AI";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upper bound for an uploaded food photo
const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// Multipart part carrying the photo
const IMAGE_FIELD: &str = "image";

pub fn app_router<R>(gate: &AuthGate<R>) -> Router
where
    R: UserRepository + ProfileRepository + TokenRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", gate.guard(RouteOptions::anonymous(), get(status)))
        .route("/ping", gate.guard(RouteOptions::anonymous(), get(ping)))
        .route(
            "/analyze",
            gate.guard(RouteOptions::default(), post(analyze))
                .layer(DefaultBodyLimit::max(MAX_IMAGE_BYTES)),
        )
        .nest("/auth", auth_router(gate))
        .nest("/user", user_router(gate))
        .merge(gate.guard_router(RouteOptions::anonymous(), docs_router()))
}

/// Swagger UI at `/documentation` plus the raw document it renders.
fn docs_router() -> Router {
    SwaggerUi::new(DOCS_PATH)
        .url(DOCS_JSON_PATH, ApiDoc::openapi())
        .into()
}

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    #[schema(value_type = String, example = "Kalorie AI")]
    pub app: &'static str,
    #[schema(value_type = String)]
    pub version: &'static str,
    pub pong: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PingResponse {
    pub pong: bool,
}

/// GET /
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service name and version", body = StatusResponse)),
    tag = "status"
)]
pub(crate) async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        app: APP_NAME,
        version: APP_VERSION,
        pong: true,
    })
}

/// GET /ping
#[utoipa::path(
    get,
    path = "/ping",
    responses((status = 200, description = "Liveness", body = PingResponse)),
    tag = "status"
)]
pub(crate) async fn ping() -> Json<PingResponse> {
    Json(PingResponse { pong: true })
}

// ============================================================================
// Analyze
// ============================================================================

/// Multipart body of `POST /analyze`
#[derive(ToSchema)]
#[allow(dead_code)] // schema only; the handler reads the multipart stream
pub struct AnalyzeUpload {
    /// Food photo with an `image/*` content type
    #[schema(value_type = String, format = Binary)]
    image: Vec<u8>,
}

fn invalid_image() -> AppError {
    AppError::bad_request("Invalid image")
}

/// POST /analyze
///
/// Accepts a `multipart/form-data` upload whose `image` part is a non-empty
/// file with an `image/*` content type. Recognition itself is not offered,
/// so a valid upload is answered with 503.
#[utoipa::path(
    post,
    path = "/analyze",
    params(auth::models::ClientAuthorizationHeader),
    request_body(content = AnalyzeUpload, content_type = "multipart/form-data"),
    responses(
        (status = 400, description = "Missing, empty or non-image upload", body = auth::models::ErrorResponse),
        (status = 401, description = "Gate rejection", body = auth::models::ErrorResponse),
        (status = 503, description = "Food analysis is not available", body = auth::models::ErrorResponse)
    ),
    security(("bearer" = [])),
    tag = "analyze"
)]
pub(crate) async fn analyze(
    AuthenticatedUser(user): AuthenticatedUser,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<serde_json::Value>> {
    let mut multipart = multipart.map_err(|e| invalid_image().with_source(e))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| invalid_image().with_source(e))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let is_image = field
            .content_type()
            .is_some_and(|content_type| content_type.starts_with("image/"));
        if !is_image {
            return Err(invalid_image());
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| invalid_image().with_source(e))?;
        if bytes.is_empty() {
            return Err(invalid_image());
        }

        tracing::info!(user_id = %user.uid, image_bytes = bytes.len(), "Food image received");
        return Err(AppError::service_unavailable("Food analysis is not available"));
    }

    Err(invalid_image())
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::application::config::{AuthConfig, JwtConfig};
    use auth::InMemoryAuthRepository;
    use auth::domain::value_object::email::Email;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::ServiceExt;

    const CLIENT_HEADER: &str = "x-app-client-authorization-token";
    const CLIENT_SECRET: &str = "s3cret";
    const BOUNDARY: &str = "kalorie-boundary";

    struct TestApp {
        router: Router,
        token: String,
    }

    async fn test_app() -> TestApp {
        let jwt = JwtConfig::new("jwt-secret", "kalorie-api", "kalorie-app").unwrap();
        let config = AuthConfig::new(CLIENT_SECRET, jwt).unwrap();
        let repo = InMemoryAuthRepository::new();
        let gate = AuthGate::new(Arc::new(repo.clone()), config);
        let router = app_router(&gate);

        let registration = json!({
            "name": "Dana",
            "email": "dana@kalorie.ai",
            "password": "Kalorie#Secret2024",
            "gender": "female",
            "workout_periods": "0-2",
            "tried_other_tracking_apps": "yes",
            "height": 170,
            "weight": 80,
            "age": 40,
            "goal": "lose_weight",
            "desited_weight": 72,
            "goal_speed": 0.8,
            "current_limitation": ["consistency"],
            "following_a_diet": "classic",
            "accomplishment_goal": ["stay_motivated"]
        });
        let (status, body) = send(
            &router,
            Request::post("/auth/register")
                .header(CLIENT_HEADER, CLIENT_SECRET)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(registration.to_string()))
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        assert!(
            repo.find_user_by_email(&Email::new("dana@kalorie.ai").unwrap())
                .await
                .unwrap()
                .is_some()
        );

        TestApp {
            router,
            token: body["accessToken"].as_str().unwrap().to_string(),
        }
    }

    async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn multipart_body(name: &str, content_type: &str, data: &[u8]) -> Vec<u8> {
        let mut body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"meal.jpg\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn analyze_request(token: &str, body: Vec<u8>) -> Request<Body> {
        Request::post("/analyze")
            .header(CLIENT_HEADER, CLIENT_SECRET)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_status_is_anonymous() {
        let app = test_app().await;
        let (status, body) = send(&app.router, Request::get("/").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "app": "Kalorie AI", "version": APP_VERSION, "pong": true }));

        let (status, body) = send(
            &app.router,
            Request::get("/ping")
                .header(CLIENT_HEADER, "wrong")
                .header(header::AUTHORIZATION, "Bearer garbage")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "pong": true }));
    }

    #[tokio::test]
    async fn test_documentation_is_anonymous() {
        let app = test_app().await;

        // The UI lives under a trailing slash; the bare path redirects there
        let response = app
            .router
            .clone()
            .oneshot(Request::get(DOCS_PATH).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(response.status().is_redirection(), "{}", response.status());
        let location = response.headers()[header::LOCATION].to_str().unwrap().to_string();
        assert_eq!(location, "/documentation/");

        let response = app
            .router
            .clone()
            .oneshot(Request::get(location.as_str()).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"), "{content_type}");

        // Credentials are ignored, even wrong ones
        let (status, doc) = send(
            &app.router,
            Request::get(DOCS_JSON_PATH)
                .header(CLIENT_HEADER, "wrong")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(doc["info"]["title"], "Kalorie AI API");
        assert!(doc["paths"]["/user"]["patch"].is_object());
        assert!(doc["paths"]["/analyze"]["post"].is_object());
    }

    #[tokio::test]
    async fn test_analyze_requires_credentials() {
        let app = test_app().await;
        let request = Request::post("/analyze")
            .header(CLIENT_HEADER, CLIENT_SECRET)
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app.router, request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            body,
            json!({ "error": "unauthorized", "message": "No authentication token" })
        );
    }

    #[tokio::test]
    async fn test_analyze_rejects_invalid_images() {
        let app = test_app().await;
        let cases = [
            multipart_body("image", "text/plain", b"not a photo"),
            multipart_body("image", "image/jpeg", b""),
            multipart_body("photo", "image/jpeg", b"\xff\xd8\xff"),
        ];
        for body in cases {
            let (status, body) = send(&app.router, analyze_request(&app.token, body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"], "bad_request");
            assert_eq!(body["message"], "Invalid image");
        }

        // Not multipart at all
        let request = Request::post("/analyze")
            .header(CLIENT_HEADER, CLIENT_SECRET)
            .header(header::AUTHORIZATION, format!("Bearer {}", app.token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .unwrap();
        let (status, body) = send(&app.router, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid image");
    }

    #[tokio::test]
    async fn test_analyze_valid_upload_is_unavailable() {
        let app = test_app().await;
        let body = multipart_body("image", "image/jpeg", b"\xff\xd8\xff\xe0 jpeg bytes");
        let (status, body) = send(&app.router, analyze_request(&app.token, body)).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["message"], "Food analysis is not available");
    }

    #[tokio::test]
    async fn test_user_routes_mounted() {
        let app = test_app().await;
        let (status, body) = send(
            &app.router,
            Request::get("/user")
                .header(CLIENT_HEADER, CLIENT_SECRET)
                .header(header::AUTHORIZATION, format!("Bearer {}", app.token))
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["email"], "dana@kalorie.ai");
    }
}
