//! Session guard for protected pages.
//!
//! The guard checks the session for a non-empty student number and reports the
//! outcome as a value instead of terminating the request itself. The HTTP layer
//! decides how to act on a required redirect, which keeps the guard testable and
//! free of response-writing side effects.

use tower_sessions::Session;

use crate::{error::Error, model::session::student::SessionStudentNumber};

/// Outcome of the session guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    /// A non-empty student number is present in session; the request may proceed.
    Authenticated(String),
    /// No usable student number in session; the caller must redirect to the
    /// contained login page path.
    RedirectRequired(String),
}

/// Check the session for a non-empty student number.
///
/// An empty string stored under the session key counts the same as no value at all.
/// The value is compared as stored; the guard does not trim.
///
/// # Returns
/// - `Ok(Gate::Authenticated)` - Student number present, carrying its value
/// - `Ok(Gate::RedirectRequired)` - Missing or empty, carrying the login page path
/// - `Err(Error)` - Session retrieval failed
pub async fn secure(session: &Session, login_url: &str) -> Result<Gate, Error> {
    match SessionStudentNumber::get(session).await? {
        Some(student_number) if !student_number.is_empty() => {
            Ok(Gate::Authenticated(student_number))
        }
        _ => Ok(Gate::RedirectRequired(login_url.to_string())),
    }
}
