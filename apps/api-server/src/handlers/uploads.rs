//! Image upload handler.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use quill_core::ports::FileStoreError;
use quill_shared::dto::UploadResponse;

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    pub filename: String,
}

/// POST /uploads?filename=... - requires authentication. The raw request
/// body is handed to the configured file store; the returned reference is
/// what callers put in a post's `img` field.
pub async fn upload(
    state: web::Data<AppState>,
    identity: Identity,
    query: web::Query<UploadQuery>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    if body.is_empty() {
        return Err(AppError::BadRequest("Empty upload body".to_string()));
    }

    let reference = state
        .files
        .store(&query.filename, &body)
        .await
        .map_err(|e| match e {
            FileStoreError::InvalidFilename(name) => {
                AppError::BadRequest(format!("Invalid filename: {name}"))
            }
            FileStoreError::Io(msg) => AppError::Internal(msg),
        })?;

    tracing::info!(by = %identity.username, reference = %reference, "Upload stored");

    Ok(HttpResponse::Created().json(UploadResponse { reference }))
}
