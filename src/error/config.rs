use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::error::InternalServerError;

/// Configuration errors (rejected environment variable values).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable was set but could not be parsed.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Name of the offending environment variable.
        var: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
