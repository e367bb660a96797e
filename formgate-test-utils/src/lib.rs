//! Shared test utilities for formgate.
//!
//! Provides the session-backed test environment used by unit and integration tests,
//! along with the constants shared across them.

pub mod constant;
pub mod error;
pub mod setup;

pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{
        constant::{TEST_LOGIN_URL, TEST_STUDENT_NUMBER},
        TestError, TestSetup,
    };
}
