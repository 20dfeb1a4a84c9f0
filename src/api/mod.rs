// file: src/api/mod.rs
// description: Gemini REST client module exports
// reference: internal module structure

pub mod client;
pub mod generate;
pub mod schema;
pub mod upload;

pub use client::GeminiClient;
pub use schema::{
    Candidate, GenerateContentResponse, GroundingChunk, GroundingMetadata, Operation,
    RetrievedContext, Status,
};
