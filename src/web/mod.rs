//! Page Host
//!
//! Serves the single chat page, built with Axum and rendered with maud.
//! Form posts drive the components and redirect back to the page.
//!
//! # Endpoints
//!
//! - `GET /` - The page
//! - `POST /chat` - Submit a question
//! - `POST /sidebar/toggle` - Show or hide the sidebar
//! - `POST /copy` - Mark code blocks of a language as copied
//! - `POST /upload` - Upload a document (when enabled)
//! - `GET /health/live` - Liveness probe
//!
//! # Example
//!
//! ```rust,ignore
//! use prepbot::backend::BackendClient;
//! use prepbot::config::Config;
//! use prepbot::web::{serve, AppState};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let backend = Arc::new(BackendClient::new(config.backend.client_config())?);
//!
//!     let state = AppState::new(backend, config);
//!     state.mount();
//!     serve(state).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod routes;
pub mod state;
pub mod views;

pub use error::{WebError, WebResult};
pub use state::{AppState, PageState};

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Largest document accepted by `POST /upload`
const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Build the page router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let mut page_routes = Router::new()
        .route("/", get(routes::page::index))
        .route("/chat", post(routes::chat::submit))
        .route("/sidebar/toggle", post(routes::sidebar::toggle))
        .route("/copy", post(routes::copy::mark_copied));

    if state.config.ui.upload_enabled {
        page_routes = page_routes.route(
            "/upload",
            post(routes::upload::upload_document).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        );
    }

    let health_routes = Router::new().route("/live", get(routes::health::liveness));

    let shared_state = Arc::new(state);

    page_routes
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

/// Start the page host
pub async fn serve(state: AppState) -> Result<(), WebError> {
    let addr = state.config.server.addr();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Prep Bot listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| WebError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Prep Bot shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
