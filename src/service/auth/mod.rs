//! Authentication services: session guard and login form handling.

pub mod guard;
pub mod login;
