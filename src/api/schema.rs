// file: src/api/schema.rs
// description: Request and response wire types for the Gemini File Search REST API
// reference: https://ai.google.dev/api/file-search/file-search-stores

use crate::models::{Content, FileInfo, StoreInfo};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateStoreRequest<'a> {
    pub display_name: &'a str,
}

/// A single page of a paginated list call.
pub(crate) trait Page {
    type Item;

    fn into_parts(self) -> (Vec<Self::Item>, Option<String>);
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct ListStoresResponse {
    pub file_search_stores: Vec<StoreInfo>,
    pub next_page_token: Option<String>,
}

impl Page for ListStoresResponse {
    type Item = StoreInfo;

    fn into_parts(self) -> (Vec<StoreInfo>, Option<String>) {
        (self.file_search_stores, self.next_page_token)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct ListDocumentsResponse {
    pub documents: Vec<FileInfo>,
    pub next_page_token: Option<String>,
}

impl Page for ListDocumentsResponse {
    type Item = FileInfo;

    fn into_parts(self) -> (Vec<FileInfo>, Option<String>) {
        (self.documents, self.next_page_token)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UploadMetadata<'a> {
    pub display_name: &'a str,
    pub mime_type: &'a str,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Status {
    pub code: Option<i32>,
    pub message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ErrorBody {
    pub error: Status,
}

/// Long-running operation handle returned by uploads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Operation {
    pub name: Option<String>,
    pub done: bool,
    pub error: Option<Status>,
    pub response: Option<serde_json::Value>,
}

impl Operation {
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|status| {
            status
                .message
                .clone()
                .unwrap_or_else(|| format!("operation failed with code {:?}", status.code))
        })
    }

    /// Resource name of the created document, when the server reports it.
    pub fn document_name(&self) -> Option<&str> {
        self.response
            .as_ref()
            .and_then(|r| r.get("documentName"))
            .and_then(|v| v.as_str())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest<'a> {
    pub contents: &'a [Content],
    pub tools: Vec<Tool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Tool {
    pub file_search: FileSearchTool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FileSearchTool {
    pub file_search_store_names: Vec<String>,
}

impl Tool {
    pub fn file_search(store: &str) -> Self {
        Self {
            file_search: FileSearchTool {
                file_search_store_names: vec![store.to_string()],
            },
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateContentResponse {
    pub candidates: Vec<Candidate>,
    pub model_version: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, empty when there is none.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(Content::joined_text)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Candidate {
    pub content: Option<Content>,
    pub grounding_metadata: Option<GroundingMetadata>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GroundingMetadata {
    pub grounding_chunks: Option<Vec<GroundingChunk>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GroundingChunk {
    pub retrieved_context: Option<RetrievedContext>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RetrievedContext {
    pub uri: Option<String>,
    pub title: Option<String>,
    pub text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_generate_request_wire_format() {
        let contents = vec![Content::user("What is the refund policy?")];
        let request = GenerateContentRequest {
            contents: &contents,
            tools: vec![Tool::file_search("fileSearchStores/abc")],
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "contents": [{"role": "user", "parts": [{"text": "What is the refund policy?"}]}],
                "tools": [{"fileSearch": {"fileSearchStoreNames": ["fileSearchStores/abc"]}}]
            })
        );
    }

    #[test]
    fn test_response_text_joins_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "Refunds "}, {"text": "take 5 days."}]}},
                {"content": {"role": "model", "parts": [{"text": "ignored"}]}}
            ]
        }))
        .unwrap();
        assert_eq!(response.text(), "Refunds take 5 days.");
        assert_eq!(GenerateContentResponse::default().text(), "");
    }

    #[test]
    fn test_list_page_parts() {
        let page: ListStoresResponse = serde_json::from_value(serde_json::json!({
            "fileSearchStores": [{"name": "fileSearchStores/a"}],
            "nextPageToken": "tok"
        }))
        .unwrap();
        let (items, token) = page.into_parts();
        assert_eq!(items.len(), 1);
        assert_eq!(token.as_deref(), Some("tok"));

        let empty: ListDocumentsResponse = serde_json::from_str("{}").unwrap();
        let (items, token) = empty.into_parts();
        assert!(items.is_empty());
        assert!(token.is_none());
    }

    #[test]
    fn test_operation_helpers() {
        let op: Operation = serde_json::from_value(serde_json::json!({
            "name": "fileSearchStores/a/upload/operations/op-1",
            "done": true,
            "response": {"documentName": "fileSearchStores/a/documents/d-1"}
        }))
        .unwrap();
        assert!(op.done);
        assert_eq!(op.document_name(), Some("fileSearchStores/a/documents/d-1"));
        assert!(op.error_message().is_none());

        let failed: Operation = serde_json::from_value(serde_json::json!({
            "done": true,
            "error": {"code": 3, "message": "unsupported file type"}
        }))
        .unwrap();
        assert_eq!(failed.error_message().as_deref(), Some("unsupported file type"));
    }
}
