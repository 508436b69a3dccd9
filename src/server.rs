use axum::{routing::get, Router};
use std::path::Path;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::info;

use crate::bot::RandomBotStrategy;
use crate::config::ServerConfig;
use crate::game::GameCoordinator;
use crate::shared::{AppError, AppState};
use crate::websockets::{websocket_handler, InMemoryConnectionManager};

/// Wire the coordinator with its in-memory broadcast channel and random computer opponent
pub fn build_state(config: &ServerConfig) -> AppState {
    let connection_manager = Arc::new(InMemoryConnectionManager::new());
    let coordinator = GameCoordinator::new(
        connection_manager,
        Arc::new(RandomBotStrategy::new()),
        config.computer_delay(),
    );
    AppState::new(coordinator)
}

pub fn build_router(app_state: AppState, static_dir: &Path) -> Router {
    // Any origin may open the game socket
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/ws", get(websocket_handler))
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

pub async fn run(config: ServerConfig) -> Result<(), AppError> {
    let app = build_router(build_state(&config), &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(
        addr = %config.listen_addr,
        static_dir = %config.static_dir.display(),
        "Caro server listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
