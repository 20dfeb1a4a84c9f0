// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{FileSearchError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub upload: UploadConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_version: String,
    pub default_model: String,
    pub timeout_secs: u64,
    pub page_size: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UploadConfig {
    pub poll_interval_ms: u64,
    pub wait_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            api_version: "v1beta".to_string(),
            default_model: "gemini-2.5-flash".to_string(),
            timeout_secs: 60,
            page_size: 20,
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 2000,
            wait_timeout_secs: 300,
        }
    }
}

impl Config {
    /// Layers built-in defaults, the TOML file and `FILE_SEARCH__*` variables.
    ///
    /// An explicit `path` must exist; without one, `config/default.toml` is
    /// read only when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder
                .add_source(config::File::from(Path::new(DEFAULT_CONFIG_PATH)).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("FILE_SEARCH")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| FileSearchError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| FileSearchError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self::default()
    }

    /// Reads the API credential from the environment (after `.env`).
    pub fn api_key() -> Result<String> {
        dotenv().ok();
        resolve_api_key(std::env::var(API_KEY_ENV).ok())
    }

    fn validate(&self) -> Result<()> {
        let api = &self.api;

        if !api.base_url.starts_with("http://") && !api.base_url.starts_with("https://") {
            return Err(FileSearchError::Config(format!(
                "api.base_url must be an http(s) URL, got {}",
                api.base_url
            )));
        }

        if api.default_model.trim().is_empty() {
            return Err(FileSearchError::Config(
                "api.default_model must not be empty".to_string(),
            ));
        }

        if api.timeout_secs == 0 {
            return Err(FileSearchError::Config(
                "api.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if api.page_size == 0 {
            return Err(FileSearchError::Config(
                "api.page_size must be greater than 0".to_string(),
            ));
        }

        if self.upload.poll_interval_ms == 0 {
            return Err(FileSearchError::Config(
                "upload.poll_interval_ms must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

fn resolve_api_key(value: Option<String>) -> Result<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(key) if !key.is_empty() => Ok(key),
        _ => Err(FileSearchError::Authentication(format!(
            "{API_KEY_ENV} environment variable is not set. \
             Set it in your shell or in a .env file in the working directory"
        ))),
    }
}
