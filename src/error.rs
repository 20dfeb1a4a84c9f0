// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FileSearchError>;

#[derive(Error, Debug)]
pub enum FileSearchError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Store not found: {0}")]
    StoreNotFound(String),

    #[error("File upload failed for {path}: {message}")]
    FileUpload { path: PathBuf, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("API request failed with status {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl FileSearchError {
    pub fn upload(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::FileUpload {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for FileSearchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_error_message() {
        let err = FileSearchError::upload("docs/a.pdf", "missing upload url");
        assert_eq!(
            err.to_string(),
            "File upload failed for docs/a.pdf: missing upload url"
        );
    }

    #[test]
    fn test_api_error_message() {
        let err = FileSearchError::Api {
            status: StatusCode::BAD_REQUEST,
            message: "bad model".to_string(),
        };
        assert!(err.to_string().contains("400"));
        assert!(err.to_string().contains("bad model"));
    }
}
