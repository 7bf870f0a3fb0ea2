//! `api` crate — HTTP REST API layer.
//!
//! Exposes:
//!   GET    /health
//!   GET    /musicians
//!   POST   /musicians
//!   GET    /musicians/{id}
//!   PUT    /musicians/{id}
//!   DELETE /musicians/{id}
//!   GET    /bands
//!   GET    /bands/{id}

pub mod error;
pub mod handlers;

use axum::{routing::get, Router};
use db::DbPool;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

pub use error::ApiError;
pub use handlers::AppState;

/// Build the router with every route bound to `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/musicians",
            get(handlers::musicians::list).post(handlers::musicians::create),
        )
        .route(
            "/musicians/:id",
            get(handlers::musicians::get)
                .put(handlers::musicians::update)
                .delete(handlers::musicians::delete),
        )
        .route("/bands", get(handlers::bands::list))
        .route("/bands/:id", get(handlers::bands::get))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Serve the API on `bind` until Ctrl-C is received.
///
/// The pool is not closed here; the caller owns its teardown.
pub async fn serve(bind: &str, pool: DbPool) -> std::io::Result<()> {
    let listener = TcpListener::bind(bind).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(AppState::from_pool(pool)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(err) => error!("Failed to listen for shutdown signal: {err}"),
    }
}
