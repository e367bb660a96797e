//! HTTP controller endpoints for the formgate web API.
//!
//! Controllers handle HTTP requests, run the services, and map their outcomes to
//! responses: validation failures become displayable errors, guard decisions become
//! redirects. They integrate with tower-sessions for session management and use
//! utoipa for OpenAPI documentation.

pub mod auth;
pub mod feedback;
