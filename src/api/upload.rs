// file: src/api/upload.rs
// description: Resumable uploads into a store and long-running operation polling
// reference: https://ai.google.dev/api/file-search/file-search-stores#method:-filesearchstores.uploadtofilesearchstore

use crate::api::client::GeminiClient;
use crate::api::schema::{Operation, UploadMetadata};
use crate::error::{FileSearchError, Result};
use crate::models::StoreName;
use crate::upload::UploadSource;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

const UPLOAD_URL_HEADER: &str = "x-goog-upload-url";

impl GeminiClient {
    /// Uploads the file behind `source` into `store` and returns the import
    /// operation.
    ///
    /// Only the ASCII name from `source` goes into headers; `display_name`
    /// travels in the JSON body.
    pub async fn upload_to_store(
        &self,
        store: &StoreName,
        source: &UploadSource,
        display_name: &str,
        mime_type: &str,
    ) -> Result<Operation> {
        let path = source.path();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| FileSearchError::upload(path, e.to_string()))?;
        let size = bytes.len();

        info!(
            "Uploading {} ({} bytes, {}) to {}",
            source.file_name(),
            size,
            mime_type,
            store
        );

        let upload_url = self
            .start_upload(store, source, display_name, mime_type, size)
            .await
            .map_err(|e| as_upload_error(e, path))?;
        debug!("Resumable upload session opened");

        let request = self
            .http
            .post(&upload_url)
            .header("X-Goog-Upload-Command", "upload, finalize")
            .header("X-Goog-Upload-Offset", "0")
            .header(reqwest::header::CONTENT_LENGTH, size.to_string())
            .body(bytes);

        let operation: Operation = self
            .execute_json(request, Some(store))
            .await
            .map_err(|e| as_upload_error(e, path))?;

        check_operation(operation, path)
    }

    async fn start_upload(
        &self,
        store: &StoreName,
        source: &UploadSource,
        display_name: &str,
        mime_type: &str,
        size: usize,
    ) -> Result<String> {
        let url = self.upload_url(&format!("{}:uploadToFileSearchStore", store));

        let request = self
            .http
            .post(url)
            .header("X-Goog-Upload-Protocol", "resumable")
            .header("X-Goog-Upload-Command", "start")
            .header("X-Goog-Upload-Header-Content-Length", size.to_string())
            .header("X-Goog-Upload-Header-Content-Type", mime_type)
            .header("X-Goog-Upload-File-Name", source.file_name())
            .json(&UploadMetadata {
                display_name,
                mime_type,
            });

        let response = self.execute(request, Some(store)).await?;

        response
            .headers()
            .get(UPLOAD_URL_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| {
                FileSearchError::Serialization(
                    "Upload session response did not include an upload URL".to_string(),
                )
            })
    }

    pub async fn get_operation(&self, name: &str) -> Result<Operation> {
        let request = self.http.get(self.url(name));
        self.execute_json(request, None).await
    }

    /// Polls `operation` until it reports done or `timeout` elapses.
    pub async fn wait_for_operation(
        &self,
        operation: Operation,
        poll_interval: Duration,
        timeout: Duration,
        path: &Path,
    ) -> Result<Operation> {
        let started = Instant::now();
        let mut current = operation;

        while !current.done {
            let Some(name) = current.name.clone() else {
                return Err(FileSearchError::upload(
                    path,
                    "server returned an operation without a name",
                ));
            };

            if started.elapsed() >= timeout {
                return Err(FileSearchError::upload(
                    path,
                    format!("timed out after {}s waiting for {}", timeout.as_secs(), name),
                ));
            }

            tokio::time::sleep(poll_interval).await;
            debug!("Polling operation {}", name);
            current = self.get_operation(&name).await?;
        }

        check_operation(current, path)
    }
}

/// An operation that already carries an error is an upload failure.
fn check_operation(operation: Operation, path: &Path) -> Result<Operation> {
    match operation.error_message() {
        Some(message) => Err(FileSearchError::upload(path, message)),
        None => Ok(operation),
    }
}

/// Credential and missing-store errors keep their kind; everything else on the
/// upload path becomes [`FileSearchError::FileUpload`].
fn as_upload_error(err: FileSearchError, path: &Path) -> FileSearchError {
    match err {
        FileSearchError::Authentication(_) | FileSearchError::StoreNotFound(_) => err,
        FileSearchError::FileUpload { .. } => err,
        other => FileSearchError::upload(path, other.to_string()),
    }
}
