use std::sync::Arc;

use crate::config::Config;

/// Shared state handed to every axum handler.
#[derive(Clone)]
pub struct AppState {
    /// Runtime configuration, shared across requests.
    pub config: Arc<Config>,
}
