// file: src/models/store.rs
// description: Store resource names and store listing model
// reference: https://ai.google.dev/api/file-search/file-search-stores

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const STORE_NAME_PREFIX: &str = "fileSearchStores/";

/// Prefixes `name` with `fileSearchStores/` unless it already carries it.
pub fn normalize_store_name(name: &str) -> String {
    if name.starts_with(STORE_NAME_PREFIX) {
        name.to_string()
    } else {
        format!("{STORE_NAME_PREFIX}{name}")
    }
}

/// Fully qualified store resource name. Always starts with [`STORE_NAME_PREFIX`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoreName(String);

impl StoreName {
    pub fn new(name: &str) -> Self {
        Self(normalize_store_name(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StoreName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StoreName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreInfo {
    pub name: String,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub create_time: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_adds_prefix() {
        assert_eq!(normalize_store_name("abc123"), "fileSearchStores/abc123");
    }

    #[test]
    fn test_normalize_keeps_prefixed_name() {
        assert_eq!(
            normalize_store_name("fileSearchStores/abc123"),
            "fileSearchStores/abc123"
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for input in ["", "abc", "fileSearchStores/", "fileSearchStores/x", "stores/abc", "파일"] {
            let once = normalize_store_name(input);
            assert_eq!(normalize_store_name(&once), once);
        }
    }

    #[test]
    fn test_normalize_is_case_sensitive() {
        assert_eq!(
            normalize_store_name("filesearchstores/abc"),
            "fileSearchStores/filesearchstores/abc"
        );
    }

    #[test]
    fn test_store_name_from_str() {
        let name = StoreName::new("my-store-1");
        assert_eq!(name.as_str(), "fileSearchStores/my-store-1");
        assert_eq!(StoreName::from("fileSearchStores/my-store-1"), name);
    }

    #[test]
    fn test_store_info_deserialize() {
        let json = r#"{
            "name": "fileSearchStores/abc",
            "displayName": "Handbook",
            "createTime": "2025-11-06T08:30:00.123456Z",
            "activeDocumentsCount": "3"
        }"#;
        let info: StoreInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.name, "fileSearchStores/abc");
        assert_eq!(info.display_name.as_deref(), Some("Handbook"));
        assert!(info.create_time.is_some());

        let bare: StoreInfo = serde_json::from_str(r#"{"name": "fileSearchStores/x"}"#).unwrap();
        assert!(bare.display_name.is_none());
        assert!(bare.create_time.is_none());
    }
}
