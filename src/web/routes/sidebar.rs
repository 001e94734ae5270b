//! Sidebar Routes
//!
//! - POST /sidebar/toggle - Show or hide the sidebar

use axum::{extract::State, response::Redirect};
use std::sync::Arc;

use crate::web::state::AppState;

/// POST /sidebar/toggle
pub async fn toggle(State(state): State<Arc<AppState>>) -> Redirect {
    let visible = state.page.write().await.shell.toggle_sidebar();
    tracing::debug!(visible, "Sidebar toggled");
    Redirect::to("/")
}
