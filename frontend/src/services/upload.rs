//! HTTP service uploading PDF files to the report endpoint.

use gloo_net::http::Request;
use serde_json::Value;
use web_sys::{File, FormData};

use crate::config::{MSG_PROCESSING_FAILED, UPLOAD_FIELD};
use crate::error::{AppResult, UploadError};
use crate::types::{ErrorResponse, ReportResponse, SelectedFile};

/// Upload every file in one multipart request and return the report text.
///
/// Each file is sent as a `files` part with its original name; the content
/// type travels with the blob.
pub async fn upload_files(files: &[SelectedFile<File>], endpoint: &str) -> AppResult<String> {
    let form_data = FormData::new()
        .map_err(|e| UploadError::Request(format!("Failed to create FormData: {:?}", e)))?;

    for file in files {
        form_data
            .append_with_blob_and_filename(UPLOAD_FIELD, &file.handle, &file.name)
            .map_err(|e| UploadError::Request(format!("Failed to append {}: {:?}", file.name, e)))?;
    }

    let request = Request::post(endpoint)
        .body(form_data)
        .map_err(|e| UploadError::Request(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| UploadError::Transport(e.to_string()))?;

    let ok = response.ok();
    let status = response.status();

    let body = response
        .json::<Value>()
        .await
        .map_err(|e| UploadError::Transport(e.to_string()))?;

    interpret_response(ok, status, body)
}

/// Turn a decoded response body into the report text or a user-facing error.
pub fn interpret_response(ok: bool, status: u16, body: Value) -> AppResult<String> {
    if !ok {
        let error = serde_json::from_value::<ErrorResponse>(body)
            .ok()
            .and_then(|r| r.error)
            .filter(|e| !e.is_empty());
        log::warn!("Upload rejected with status {}: {:?}", status, error);
        return Err(UploadError::Server(
            error.unwrap_or_else(|| MSG_PROCESSING_FAILED.to_string()),
        ));
    }

    let response = serde_json::from_value::<ReportResponse>(body).unwrap_or_default();

    if let (Some(files), Some(texts)) = (response.files_processed, response.texts_combined) {
        log::info!(
            "Server processed {} file(s), combined {} text(s), {} characters",
            files,
            texts,
            response.total_characters.unwrap_or(0)
        );
    }

    match response.report {
        Some(report) => Ok(report),
        None => {
            log::error!("Status {} response carried no report", status);
            Err(UploadError::Server(MSG_PROCESSING_FAILED.to_string()))
        }
    }
}
