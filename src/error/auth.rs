use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Authentication errors (session presence checks).
#[derive(Error, Debug)]
pub enum AuthError {
    /// No student number stored in the session.
    #[error("Student number is not present in session")]
    StudentNumberNotInSession,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::StudentNumberNotInSession => {
                tracing::debug!("{}", Self::StudentNumberNotInSession);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "Not logged in".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
