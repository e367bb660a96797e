//! Constant values shared across formgate tests.

/// Student number used across tests; any non-empty value passes validation.
pub static TEST_STUDENT_NUMBER: &str = "12345";

/// Login page path the guard redirects unauthenticated requests to.
pub static TEST_LOGIN_URL: &str = "./login.php";
