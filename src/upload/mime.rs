// file: src/upload/mime.rs
// description: MIME type inference from file extensions

use std::path::Path;

pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

pub fn guess_mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("pdf") => "application/pdf",
        Some("txt") | Some("text") | Some("log") => "text/plain",
        Some("md") | Some("markdown") => "text/markdown",
        Some("html") | Some("htm") => "text/html",
        Some("csv") => "text/csv",
        Some("json") => "application/json",
        Some("xml") => "application/xml",
        Some("yaml") | Some("yml") => "application/x-yaml",
        Some("rtf") => "application/rtf",
        Some("doc") => "application/msword",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Some("xls") => "application/vnd.ms-excel",
        Some("xlsx") => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        Some("ppt") => "application/vnd.ms-powerpoint",
        Some("pptx") => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        Some("py") => "text/x-python",
        Some("js") => "text/javascript",
        Some("ts") => "application/typescript",
        Some("java") => "text/x-java",
        Some("c") | Some("h") => "text/x-c",
        Some("cpp") | Some("hpp") | Some("cc") => "text/x-c++",
        Some("rs") => "text/x-rust",
        Some("go") => "text/x-go",
        Some("sql") => "application/sql",
        Some("zip") => "application/zip",
        _ => DEFAULT_MIME_TYPE,
    }
}
