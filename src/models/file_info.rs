// file: src/models/file_info.rs
// description: Document listing model for files inside a store

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    pub name: String,

    #[serde(default)]
    pub display_name: Option<String>,

    /// Server-side processing state, e.g. `STATE_ACTIVE`.
    #[serde(default)]
    pub state: Option<String>,
}

impl FileInfo {
    /// State without the `STATE_` enum prefix.
    pub fn short_state(&self) -> Option<&str> {
        self.state
            .as_deref()
            .map(|s| s.strip_prefix("STATE_").unwrap_or(s))
    }
}
