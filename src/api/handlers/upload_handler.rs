//! File intake handler.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::config::UPLOAD_FIELD;

/// Upload outcome envelope
#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(rename = "originalFilename", skip_serializing_if = "Option::is_none")]
    pub original_filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UploadResponse {
    fn stored(filename: String, original_filename: String, size: u64) -> Self {
        Self {
            success: true,
            filename: Some(filename),
            original_filename: Some(original_filename),
            size: Some(size),
            error: None,
        }
    }

    fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            filename: None,
            original_filename: None,
            size: None,
            error: Some(error.into()),
        }
    }
}

/// Accept a single multipart file and persist it locally.
///
/// No content-type or size limits are enforced.
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "Upload",
    responses(
        (status = 200, description = "File stored; body carries the stored and original names plus size", body = UploadResponse),
        (status = 400, description = "The `file` multipart field is missing or not a file", body = UploadResponse),
        (status = 500, description = "Storing the file failed", body = UploadResponse)
    )
)]
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> (StatusCode, Json<UploadResponse>) {
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        // A field without a filename is a plain form value, not a file.
        let Some(filename) = field.file_name().map(ToString::to_string) else {
            continue;
        };
        match field.bytes().await {
            Ok(bytes) => {
                file = Some((filename, bytes.to_vec()));
                break;
            }
            Err(err) => {
                tracing::error!(error = %err, "reading upload body failed");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(UploadResponse::failed("failed to read upload")),
                );
            }
        }
    }

    let Some((original_filename, bytes)) = file else {
        return (
            StatusCode::BAD_REQUEST,
            Json(UploadResponse::failed("missing upload file")),
        );
    };

    match state.uploads.save(&original_filename, &bytes).await {
        Ok(stored) => (
            StatusCode::OK,
            Json(UploadResponse::stored(
                stored.filename,
                original_filename,
                stored.size,
            )),
        ),
        Err(err) => {
            tracing::error!(kind = err.code(), error = %err, "storing upload failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(UploadResponse::failed("failed to store file")),
            )
        }
    }
}
