//! Student number session data model.
//!
//! The student number is the only piece of session state this application keeps. It
//! is written once at login and read by the guard on every request to a protected
//! page; its mere presence (non-empty) is what counts as being logged in.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::Error;

/// Session key under which the student number is stored.
///
/// The key is kept identical to the one the login page historically used, so
/// sessions written by either side stay interchangeable.
pub const SESSION_STUDENT_NUMBER_KEY: &str = "studentnummer";

/// Session wrapper for the logged-in student number.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionStudentNumber(pub String);

impl SessionStudentNumber {
    /// Insert the student number into session
    pub async fn insert(session: &Session, student_number: &str) -> Result<(), Error> {
        session
            .insert(
                SESSION_STUDENT_NUMBER_KEY,
                SessionStudentNumber(student_number.to_string()),
            )
            .await?;

        Ok(())
    }

    /// Get the student number from session, `None` when no value is stored
    pub async fn get(session: &Session) -> Result<Option<String>, Error> {
        Ok(session
            .get::<SessionStudentNumber>(SESSION_STUDENT_NUMBER_KEY)
            .await?
            .map(|SessionStudentNumber(student_number)| student_number))
    }

    /// Remove the student number from session, returning it when one was stored
    pub async fn remove(session: &Session) -> Result<Option<String>, Error> {
        Ok(session
            .remove::<SessionStudentNumber>(SESSION_STUDENT_NUMBER_KEY)
            .await?
            .map(|SessionStudentNumber(student_number)| student_number))
    }
}
