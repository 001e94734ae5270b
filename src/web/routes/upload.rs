//! Upload Routes
//!
//! - POST /upload - Upload one document (multipart field `file`)
//!
//! Registered only when `ui.upload_enabled` is set.

use axum::{
    extract::{Multipart, State},
    response::Redirect,
};
use std::sync::Arc;

use crate::backend::UploadFile;
use crate::web::error::{WebError, WebResult};
use crate::web::state::AppState;

/// POST /upload
///
/// Backend failures surface as the sidebar alert on the next page load.
/// Only a malformed request is an error here.
pub async fn upload_document(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> WebResult<Redirect> {
    let file = read_file_field(&mut multipart)
        .await?
        .ok_or_else(|| WebError::Validation("missing multipart field 'file'".to_string()))?;

    tracing::info!(file = %file.file_name, size = file.bytes.len(), "Uploading document");

    if state.upload_document(file).await.is_none() {
        tracing::warn!("Upload already in progress, request ignored");
    }

    Ok(Redirect::to("/"))
}

async fn read_file_field(multipart: &mut Multipart) -> WebResult<Option<UploadFile>> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("document").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;

        if file_name.is_empty() || bytes.is_empty() {
            return Ok(None);
        }

        let mut file = UploadFile::new(file_name, bytes.to_vec());
        if let Some(content_type) = content_type {
            file = file.content_type(content_type);
        }
        return Ok(Some(file));
    }
    Ok(None)
}
