//! Copy Routes
//!
//! - POST /copy - Show "Copied!" on code blocks of one language
//!
//! The clipboard write itself happens in the browser.

use axum::{extract::State, response::Redirect, Form};
use serde::Deserialize;
use std::sync::Arc;
use tokio::time::Instant;

use crate::web::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CopyForm {
    /// Language tag of the block, empty when it has none
    #[serde(default)]
    pub language: String,
}

/// POST /copy
pub async fn mark_copied(State(state): State<Arc<AppState>>, Form(form): Form<CopyForm>) -> Redirect {
    state.page.write().await.copy.click(&form.language, Instant::now());
    Redirect::to("/#latest")
}
