//! Page Route
//!
//! - GET / - Render shell, sidebar and chat panel

use axum::{extract::State, response::Html};
use std::sync::Arc;
use tokio::time::Instant;

use crate::web::state::AppState;
use crate::web::views;

/// GET /
///
/// Takes the pending upload alert so it shows exactly once.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let now = Instant::now();
    let mut page = state.page.write().await;

    page.copy.expire(now);
    let alert = page.sidebar.take_alert();

    Html(views::page(&page, &state.config.ui, alert.as_deref(), now).into_string())
}
