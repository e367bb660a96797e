use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Validation failures for a submitted form.
///
/// The message is formatted as HTML list items so the login page can render it
/// directly inside an error list.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ValidationDto {
    /// Accumulated list-item-formatted validation messages
    pub errors: String,
}

/// The student number currently stored in session
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SessionDto {
    /// Student number as it was submitted at login
    pub student_number: String,
}

/// Payload of the guarded feedback page
#[derive(Serialize, Deserialize, ToSchema)]
pub struct FeedbackPageDto {
    /// Student number of the logged-in student
    pub student_number: String,
}
