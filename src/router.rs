//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI
//! documentation using utoipa. All API endpoints are registered here with their
//! OpenAPI specifications, and Swagger UI is configured to provide interactive API
//! documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI.
///
/// # Registered Endpoints
/// - `POST /api/auth/login` - Validate the login form and establish a session
/// - `GET /api/auth/logout` - Clear the session
/// - `GET /api/auth/session` - Get the student number in the current session
/// - `GET /api/feedback` - The guarded feedback page
///
/// The OpenAPI specification is served at `/api/docs/openapi.json`, with Swagger UI
/// at `/api/docs`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Formgate", description = "Formgate API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::feedback::FEEDBACK_TAG, description = "Guarded feedback page routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_session))
        .routes(routes!(controller::feedback::get_feedback))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
