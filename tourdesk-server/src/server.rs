//! Router construction and the serve loop

use std::net::SocketAddr;
use std::path::Path;

use axum::{routing::post, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

use tourdesk_core::config::ServerConfig;

use crate::handlers::chat_handler;
use crate::state::AppState;

/// Build the application router
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/chat", post(chat_handler))
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the application until ctrl-c
pub async fn run_server(state: AppState, config: &ServerConfig) -> anyhow::Result<()> {
    let app = build_router(state, Path::new(&config.static_dir));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}
