// file: src/models/search_response.rs
// description: Grounded answer and citation models returned by search

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// Title of the retrieved source document
    pub title: Option<String>,

    /// Source locator (URI) of the retrieved chunk
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub answer: String,

    #[serde(default)]
    pub citations: Vec<Citation>,

    /// Model the request was sent to
    pub model: String,
}

impl SearchResponse {
    pub fn new(answer: String, citations: Vec<Citation>, model: impl Into<String>) -> Self {
        Self {
            answer,
            citations,
            model: model.into(),
        }
    }

    pub fn has_citations(&self) -> bool {
        !self.citations.is_empty()
    }

    /// Numbered source lines, `Unknown` for untitled citations.
    pub fn format_sources(&self) -> Vec<String> {
        self.citations
            .iter()
            .enumerate()
            .map(|(idx, cite)| format!("{}. {}", idx + 1, cite.title.as_deref().unwrap_or("Unknown")))
            .collect()
    }
}
