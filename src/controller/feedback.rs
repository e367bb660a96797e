use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use tower_sessions::Session;

use crate::{
    error::Error,
    model::{
        api::{ErrorDto, FeedbackPageDto},
        app::AppState,
    },
    service::auth::guard::{secure, Gate},
};

/// OpenAPI tag for the feedback routes.
pub static FEEDBACK_TAG: &str = "feedback";

/// Guarded feedback page
///
/// Runs the session guard before serving the page payload. A request without a
/// non-empty student number in session is redirected to the login page instead.
///
/// # Responses
/// - 200 (OK): Student number present in session, feedback page payload returned
/// - 307 (Temporary Redirect): Not logged in, redirect to the login page
/// - 500 (Internal Server Error): Session retrieval failed
#[utoipa::path(
    get,
    path = "/api/feedback",
    tag = FEEDBACK_TAG,
    responses(
        (status = 200, description = "Student number present in session", body = FeedbackPageDto),
        (status = 307, description = "Not logged in, redirect to the login page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_feedback(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, Error> {
    match secure(&session, &state.config.login_url).await? {
        Gate::Authenticated(student_number) => {
            Ok(Json(FeedbackPageDto { student_number }).into_response())
        }
        Gate::RedirectRequired(path) => Ok(Redirect::temporary(&path).into_response()),
    }
}
