// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod search;
pub mod upload;
pub mod utils;

pub use api::{GeminiClient, GenerateContentResponse, Operation};
pub use config::{ApiConfig, Config, UploadConfig};
pub use error::{FileSearchError, Result};
pub use models::{
    Citation, Content, FileInfo, Role, SearchResponse, StoreInfo, StoreName,
    normalize_store_name,
};
pub use search::{ChatSession, ResponseMapper, is_quit_command, query_store};
pub use upload::{FilenameSanitizer, UploadSource, guess_mime_type};
pub use utils::{Spinner, Validator};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let _config = Config::default_config();
        assert_eq!(
            normalize_store_name("abc123"),
            StoreName::new("abc123").to_string()
        );
        assert_eq!(FilenameSanitizer::sanitize("cafe\u{0301}.txt"), "caf%C3%A9.txt");
    }
}
