//! Formgate application core modules.
//!
//! This crate contains the backend for the student feedback portal: the session guard
//! protecting the feedback page, validation of the login form that establishes the
//! session, and the HTTP surface wiring both together. The session store itself and
//! the rendered pages are provided by the surrounding framework and are out of scope.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
