//! Core application services.
//!
//! Services hold the behavior behind the HTTP handlers: the session guard deciding
//! whether a request may reach a protected page, and the login form validation and
//! extraction logic.

pub mod auth;
