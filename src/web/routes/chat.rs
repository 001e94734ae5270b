//! Chat Routes
//!
//! - POST /chat - Submit a question (form field `question`)

use axum::{extract::State, response::Redirect, Form};
use serde::Deserialize;
use std::sync::Arc;

use crate::web::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AskForm {
    #[serde(default)]
    pub question: String,
}

/// POST /chat
///
/// Accepted questions are answered in the background; the page polls until
/// the loading flag clears.
pub async fn submit(State(state): State<Arc<AppState>>, Form(form): Form<AskForm>) -> Redirect {
    if state.submit_question(&form.question).await.is_none() {
        tracing::debug!("Question not accepted");
    }
    Redirect::to("/#latest")
}
