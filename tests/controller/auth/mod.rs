//! Tests for authentication controller endpoints.

mod login;
