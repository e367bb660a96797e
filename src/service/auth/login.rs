//! Login form validation and extraction.
//!
//! The login form carries a single recognized field, `student`. Validation yields a
//! human-readable, list-item-formatted message for display on the login page;
//! extraction returns the submitted value untouched.

use crate::model::form::FormSubmission;

/// Name of the form field holding the submitted student number.
pub const STUDENT_FIELD: &str = "student";

/// Validation message for a blank student number, formatted as an HTML list item.
pub const STUDENT_NUMBER_MISSING: &str = "<li>Het studentnummer is niet ingevuld</li>";

/// Validate the login form.
///
/// Checks that the `student` field holds a non-blank value; a field that was not
/// submitted at all reads as empty. Failed checks accumulate into one list-item
/// string, returned only when at least one check failed. `None` signals success.
pub fn login_check(form: &FormSubmission) -> Option<String> {
    let mut errors = String::new();

    if form.value(STUDENT_FIELD).trim().is_empty() {
        errors.push_str(STUDENT_NUMBER_MISSING);
    }

    if errors.trim().is_empty() {
        None
    } else {
        Some(errors)
    }
}

/// Extract the submitted student number exactly as entered.
///
/// No trimming and no validation; callers wanting a validated value run
/// [`login_check`] first.
pub fn login(form: &FormSubmission) -> String {
    form.value(STUDENT_FIELD).to_string()
}
