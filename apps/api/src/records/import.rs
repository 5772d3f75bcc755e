//! Text import for resume and job forms.
//!
//! Plain-text uploads are decoded directly; PDFs go through `pdf_extract` on
//! the blocking pool. The extracted text is returned to the caller, nothing
//! is stored.

use axum::{extract::Multipart, Json};
use bytes::Bytes;
use serde::Serialize;
use tracing::{debug, warn};

use crate::auth::CurrentUser;
use crate::errors::AppError;

const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    PlainText,
    Pdf,
    Unsupported,
}

impl UploadKind {
    pub fn detect(file_name: &str, content_type: Option<&str>) -> Self {
        let name = file_name.to_lowercase();
        match content_type {
            Some("text/plain") => return UploadKind::PlainText,
            Some("application/pdf") => return UploadKind::Pdf,
            _ => {}
        }
        if name.ends_with(".txt") {
            UploadKind::PlainText
        } else if name.ends_with(".pdf") {
            UploadKind::Pdf
        } else {
            UploadKind::Unsupported
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub file_name: String,
    pub text: String,
}

pub async fn extract_text(kind: UploadKind, data: Bytes) -> Result<String, AppError> {
    match kind {
        UploadKind::PlainText => Ok(String::from_utf8_lossy(&data).into_owned()),
        UploadKind::Pdf => {
            let extracted =
                tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
                    .await
                    .map_err(|e| {
                        AppError::Internal(anyhow::anyhow!("PDF extraction task failed: {e}"))
                    })?;
            extracted.map_err(|e| {
                warn!("PDF text extraction failed: {e}");
                AppError::Validation(
                    "Could not read text from this PDF. Please copy the key text manually."
                        .to_string(),
                )
            })
        }
        UploadKind::Unsupported => Err(AppError::Validation(
            "Only .txt and .pdf files can be read automatically. For Word documents, \
             please copy the key text into the Summary or Description field."
                .to_string(),
        )),
    }
}

/// POST /api/v1/import
///
/// Multipart upload with a single `file` field. Returns the text so the
/// client can place it in a resume summary or job description.
pub async fn handle_import(
    _current: CurrentUser,
    mut multipart: Multipart,
) -> Result<Json<ImportResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid upload: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let kind = UploadKind::detect(&file_name, field.content_type());
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Invalid upload: {e}")))?;

        debug!(%file_name, ?kind, size = data.len(), "Importing uploaded file");
        let text = extract_text(kind, data).await?;
        return Ok(Json(ImportResponse { file_name, text }));
    }

    Err(AppError::Validation(format!(
        "Upload a file in the '{UPLOAD_FIELD}' field."
    )))
}
