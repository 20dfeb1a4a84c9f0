// file: src/search/mod.rs
// description: grounded search and chat module exports
// reference: internal module structure

pub mod chat;
pub mod mapper;

pub use chat::{ChatSession, QUIT_COMMANDS, is_quit_command};
pub use mapper::ResponseMapper;

use crate::api::GeminiClient;
use crate::error::Result;
use crate::models::{Content, SearchResponse, StoreName};

/// Single-shot question against `store`.
pub async fn query_store(
    client: &GeminiClient,
    store: &StoreName,
    model: &str,
    question: &str,
) -> Result<SearchResponse> {
    let contents = [Content::user(question)];
    let response = client.generate_content(model, &contents, store).await?;
    Ok(ResponseMapper::map(&response, model))
}
