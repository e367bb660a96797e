use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, Error},
    model::{
        api::{ErrorDto, SessionDto, ValidationDto},
        app::AppState,
        form::FormSubmission,
        session::student::SessionStudentNumber,
    },
    service::auth::login as login_service,
};

/// OpenAPI tag for the authentication routes.
pub static AUTH_TAG: &str = "auth";

/// Path a successful login continues to.
pub static FEEDBACK_PATH: &str = "/api/feedback";

/// Log in with a student number
///
/// Validates the submitted form; a valid student number is stored in session and the
/// request is redirected to the feedback page. Validation failures are returned as a
/// list-item-formatted message for the login page to display.
///
/// # Responses
/// - 307 (Temporary Redirect): Login successful, redirect to the feedback page
/// - 422 (Unprocessable Entity): The student number field is blank
/// - 500 (Internal Server Error): Session storage failed
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body(content = FormSubmission, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 307, description = "Login successful, redirect to the feedback page"),
        (status = 422, description = "Validation failed", body = ValidationDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(session: Session, Form(form): Form<FormSubmission>) -> Result<Response, Error> {
    if let Some(errors) = login_service::login_check(&form) {
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(ValidationDto { errors })).into_response());
    }

    let student_number = login_service::login(&form);
    SessionStudentNumber::insert(&session, &student_number).await?;

    Ok(Redirect::temporary(FEEDBACK_PATH).into_response())
}

/// Logs the student out by clearing their session
///
/// # Responses
/// - 307 (Temporary Redirect): Logged out, redirect to the login page
/// - 500 (Internal Server Error): There was an issue clearing the session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Logged out, redirect to the login page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    // The student number is the only session state; removing it logs the
    // student out. Removing from a session that was never written is a no-op,
    // so no presence check is needed.
    SessionStudentNumber::remove(&session).await?;

    Ok(Redirect::temporary(&state.config.login_url))
}

/// Get the student number stored in the current session
///
/// # Responses
/// - 200 (OK): A student number is in session, returned as JSON
/// - 404 (Not Found): No student number in session
/// - 500 (Internal Server Error): Session retrieval failed
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Student number present in session", body = SessionDto),
        (status = 404, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_session(session: Session) -> Result<impl IntoResponse, Error> {
    let Some(student_number) = SessionStudentNumber::get(&session).await? else {
        return Err(AuthError::StudentNumberNotInSession.into());
    };

    Ok(Json(SessionDto { student_number }))
}
