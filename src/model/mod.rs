//! Application models and type definitions.
//!
//! This module contains the data models for the server: application state, API DTOs,
//! the form submission type, and the typed session data wrappers bridging the session
//! store and the HTTP handlers.

pub mod api;
pub mod app;
pub mod form;
pub mod session;
