use std::str::FromStr;

use crate::error::config::ConfigError;

/// Login page path the guard redirects unauthenticated requests to.
pub const DEFAULT_LOGIN_URL: &str = "./login.php";

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SESSION_EXPIRY_DAYS: i64 = 7;

/// Runtime configuration read from the environment, with defaults for every key.
pub struct Config {
    /// Listen port for the HTTP server.
    pub port: u16,
    /// Redirect target used by the session guard.
    pub login_url: String,
    /// Session inactivity expiry in days.
    pub session_expiry_days: i64,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_env("PORT", DEFAULT_PORT)?,
            login_url: std::env::var("LOGIN_URL").unwrap_or_else(|_| DEFAULT_LOGIN_URL.to_string()),
            session_expiry_days: parse_env("SESSION_EXPIRY_DAYS", DEFAULT_SESSION_EXPIRY_DAYS)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            login_url: DEFAULT_LOGIN_URL.to_string(),
            session_expiry_days: DEFAULT_SESSION_EXPIRY_DAYS,
        }
    }
}

fn parse_env<T>(var: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(var) {
        Ok(value) => value.parse().map_err(|e: T::Err| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}
