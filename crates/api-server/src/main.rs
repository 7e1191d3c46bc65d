//! API server for the todo service
//!
//! This is the main entry point for the Rust backend. It serves the
//! `/api/todos` REST surface over a file-backed task store.

mod config;
mod routes;
mod state;

use axum::Router;
use std::net::SocketAddr;
use std::path::PathBuf;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::CorsConfig;
use crate::state::AppState;

const DEFAULT_PORT: u16 = 5000;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_api_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine data directory
    let data_dir = std::env::var("TODO_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(".todo-data"));

    tracing::info!("Using data directory: {:?}", data_dir);

    // Create application state
    let app_state = AppState::new(data_dir)
        .await
        .expect("Failed to initialize application state");

    let cors = CorsConfig::from_env();
    tracing::info!(
        "CORS allow-list: {:?} (allow all in dev: {})",
        cors.allowed_origins,
        cors.allow_all_in_dev
    );

    let app = Router::new()
        .merge(routes::health::router())
        .merge(routes::todo::router())
        .with_state(app_state)
        .layer(cors.layer())
        .layer(TraceLayer::new_for_http());

    let port = std::env::var("PORT")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!("Todo API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
