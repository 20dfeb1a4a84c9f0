// file: src/upload/mod.rs
// description: upload preparation module exports
// reference: internal module structure

pub mod mime;
pub mod sanitizer;
pub mod staging;

pub use mime::guess_mime_type;
pub use sanitizer::FilenameSanitizer;
pub use staging::{StagedUpload, UploadSource};
