//! Tests for HTTP controller endpoints.
//!
//! This module contains integration tests for the application's HTTP controllers,
//! verifying request handling, response formatting, the login flow, and the session
//! guard protecting the feedback page.

mod auth;
mod feedback;
