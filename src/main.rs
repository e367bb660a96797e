//! Formgate server binary.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use formgate::{config::Config, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("formgate=debug,info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let session = startup::build_session_layer(&config);
    let port = config.port;
    let state = AppState {
        config: Arc::new(config),
    };

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await.unwrap();

    tracing::info!("Starting server on port {}", port);

    let router = router::routes().with_state(state).layer(session);

    axum::serve(listener, router.into_make_service())
        .await
        .unwrap();
}
