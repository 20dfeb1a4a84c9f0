// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod content;
pub mod file_info;
pub mod search_response;
pub mod store;

pub use content::{Content, Part, Role};
pub use file_info::FileInfo;
pub use search_response::{Citation, SearchResponse};
pub use store::{STORE_NAME_PREFIX, StoreInfo, StoreName, normalize_store_name};
