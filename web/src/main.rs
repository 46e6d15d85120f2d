mod actions;
mod consts;
mod cors;
mod error;
mod redpackets;
mod responses;
mod router;
mod state;
mod wallet;

use redpacket_sdk::{Config, LastCreatorStore, RestClient};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    };

    let host = std::env::var("HOST").unwrap_or_else(|_| consts::DEFAULT_HOST.into());
    let port = std::env::var("PORT").unwrap_or_else(|_| consts::DEFAULT_PORT.into());
    let base_url = std::env::var("BASE_URL").unwrap_or_else(|_| format!("http://{host}:{port}"));
    let bind_addr = format!("{host}:{port}");

    let store = match &config.last_creator_path {
        Some(path) => LastCreatorStore::new(path.clone()),
        None => LastCreatorStore::default_location(),
    };

    tracing::info!("Node endpoint: {}", config.node_url);
    tracing::info!("Module address: {}", config.module_address);
    tracing::info!("Last creator hint: {}", store.path().display());
    tracing::info!("Base URL: {base_url}");
    tracing::info!("Listening on {bind_addr}");

    let node = Arc::new(RestClient::new(config.node_url.clone()));
    let state = state::AppState::new(node, config.module_address, base_url, store);
    let app = router::build_router(state);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Ctrl+C received, shutting down"),
        _ = terminate => tracing::info!("SIGTERM received, shutting down"),
    }
}
