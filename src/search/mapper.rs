// file: src/search/mapper.rs
// description: Maps generateContent responses to answers with ordered citations

use crate::api::schema::{GenerateContentResponse, GroundingChunk};
use crate::models::{Citation, SearchResponse};

pub struct ResponseMapper;

impl ResponseMapper {
    /// One citation per grounding chunk of the first candidate, in order.
    ///
    /// `model` is the name the caller sent the request to; the payload's
    /// `modelVersion` is ignored.
    pub fn map(response: &GenerateContentResponse, model: &str) -> SearchResponse {
        let citations = response
            .candidates
            .first()
            .and_then(|c| c.grounding_metadata.as_ref())
            .and_then(|m| m.grounding_chunks.as_ref())
            .map(|chunks| chunks.iter().map(Self::citation).collect())
            .unwrap_or_default();

        SearchResponse::new(response.text(), citations, model)
    }

    fn citation(chunk: &GroundingChunk) -> Citation {
        match &chunk.retrieved_context {
            Some(source) => Citation {
                title: source.title.clone().filter(|t| !t.is_empty()),
                content: source.uri.clone(),
            },
            None => Citation::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_no_candidates() {
        let sr = ResponseMapper::map(&parse(json!({})), "gemini-2.5-flash");
        assert_eq!(sr.answer, "");
        assert!(sr.citations.is_empty());
        assert_eq!(sr.model, "gemini-2.5-flash");
    }

    #[test]
    fn test_no_grounding_metadata() {
        let response = parse(json!({
            "candidates": [{"content": {"role": "model", "parts": [{"text": "No sources."}]}}]
        }));
        let sr = ResponseMapper::map(&response, "gemini-2.5-flash");
        assert_eq!(sr.answer, "No sources.");
        assert_eq!(sr.citations.len(), 0);
    }

    #[test]
    fn test_empty_grounding_chunks() {
        let response = parse(json!({
            "candidates": [{
                "content": {"parts": [{"text": "a"}]},
                "groundingMetadata": {"groundingChunks": []}
            }]
        }));
        assert!(ResponseMapper::map(&response, "m").citations.is_empty());
    }

    #[test]
    fn test_chunks_map_in_order_with_absent_fields() {
        let response = parse(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "The policy allows 30 days."}]},
                "groundingMetadata": {
                    "groundingChunks": [
                        {"retrievedContext": {"title": "policy.pdf", "uri": "fileSearchStores/s/documents/1", "text": "..."}},
                        {"retrievedContext": {"title": "faq.md"}},
                        {"retrievedContext": {"title": "", "uri": "fileSearchStores/s/documents/3"}},
                        {}
                    ]
                }
            }],
            "modelVersion": "gemini-2.5-flash-001"
        }));

        let sr = ResponseMapper::map(&response, "gemini-2.5-flash");
        assert_eq!(sr.answer, "The policy allows 30 days.");
        assert_eq!(sr.model, "gemini-2.5-flash");
        assert_eq!(
            sr.citations,
            vec![
                Citation {
                    title: Some("policy.pdf".to_string()),
                    content: Some("fileSearchStores/s/documents/1".to_string()),
                },
                Citation {
                    title: Some("faq.md".to_string()),
                    content: None,
                },
                Citation {
                    title: None,
                    content: Some("fileSearchStores/s/documents/3".to_string()),
                },
                Citation::default(),
            ]
        );
    }

    #[test]
    fn test_only_first_candidate_is_used() {
        let response = parse(json!({
            "candidates": [
                {"content": {"parts": [{"text": "first"}]}},
                {
                    "content": {"parts": [{"text": "second"}]},
                    "groundingMetadata": {"groundingChunks": [{"retrievedContext": {"title": "x"}}]}
                }
            ]
        }));
        let sr = ResponseMapper::map(&response, "m");
        assert_eq!(sr.answer, "first");
        assert!(sr.citations.is_empty());
    }
}
