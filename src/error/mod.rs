//! Error types for the formgate server.
//!
//! This module provides the application's error handling: domain-specific error types
//! for authentication and configuration, aggregated into a single `Error` enum. All
//! errors implement `IntoResponse` for axum HTTP responses and use `thiserror` for
//! ergonomic error definitions.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{auth::AuthError, config::ConfigError},
    model::api::ErrorDto,
};

/// Main error type for the formgate server.
///
/// Aggregates the domain-specific error types and external library errors into a
/// single unified error type, using `thiserror`'s `#[from]` attribute so handlers can
/// propagate underlying errors with the `?` operator.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variable value).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (no student number in session).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
}

/// Converts application errors into HTTP responses.
///
/// `AuthError` carries its own response mapping; everything else is treated as an
/// internal server error with logging.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error
/// response.
///
/// Logs the full error message for debugging, but returns a generic error message to
/// the client to avoid exposing internal implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
