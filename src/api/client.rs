// file: src/api/client.rs
// description: Gemini File Search REST client with store and document operations
// reference: https://ai.google.dev/api/file-search/file-search-stores

use crate::api::schema::{
    CreateStoreRequest, ErrorBody, ListDocumentsResponse, ListStoresResponse, Page,
};
use crate::config::{ApiConfig, Config};
use crate::error::{FileSearchError, Result};
use crate::models::{FileInfo, StoreInfo, StoreName};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Clone)]
pub struct GeminiClient {
    pub(crate) http: Client,
    api_key: String,
    base_url: String,
    api_version: String,
    page_size: u32,
}

impl GeminiClient {
    /// Fails with [`FileSearchError::Authentication`] on a blank key, before
    /// any request is made.
    pub fn new(api_key: String, config: &ApiConfig) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(FileSearchError::Authentication(
                "API key must not be empty".to_string(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_version: config.api_version.clone(),
            page_size: config.page_size,
        })
    }

    pub fn from_env(config: &ApiConfig) -> Result<Self> {
        let api_key = Config::api_key()?;
        Self::new(api_key, config)
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}/{}", self.base_url, self.api_version, path)
    }

    pub(crate) fn upload_url(&self, path: &str) -> String {
        format!("{}/upload/{}/{}", self.base_url, self.api_version, path)
    }

    /// Sends an authenticated request and turns non-2xx replies into errors.
    ///
    /// `store` marks the call as store-scoped so a 404 becomes
    /// [`FileSearchError::StoreNotFound`].
    pub(crate) async fn execute(
        &self,
        request: RequestBuilder,
        store: Option<&StoreName>,
    ) -> Result<Response> {
        let response = request.header(API_KEY_HEADER, &self.api_key).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(error_from_status(status, &body, store))
    }

    pub(crate) async fn execute_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        store: Option<&StoreName>,
    ) -> Result<T> {
        let response = self.execute(request, store).await?;
        response.json::<T>().await.map_err(|e| {
            FileSearchError::Serialization(format!("Failed to parse API response: {}", e))
        })
    }

    async fn list_all<P>(&self, path: &str, store: Option<&StoreName>) -> Result<Vec<P::Item>>
    where
        P: Page + DeserializeOwned,
    {
        let url = self.url(path);
        let mut items = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self
                .http
                .get(&url)
                .query(&[("pageSize", self.page_size.to_string())]);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token)]);
            }

            let page: P = self.execute_json(request, store).await?;
            let (mut batch, next) = page.into_parts();
            debug!("Fetched {} items from {}", batch.len(), path);
            items.append(&mut batch);

            match next {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        Ok(items)
    }

    pub async fn create_store(&self, display_name: &str) -> Result<StoreInfo> {
        info!("Creating store '{}'", display_name);

        let request = self
            .http
            .post(self.url("fileSearchStores"))
            .json(&CreateStoreRequest { display_name });

        self.execute_json(request, None).await
    }

    pub async fn list_stores(&self) -> Result<Vec<StoreInfo>> {
        self.list_all::<ListStoresResponse>("fileSearchStores", None)
            .await
    }

    /// `force` also deletes the documents the store still holds.
    pub async fn delete_store(&self, store: &StoreName, force: bool) -> Result<()> {
        info!("Deleting store {} (force: {})", store, force);

        let request = self
            .http
            .delete(self.url(store.as_str()))
            .query(&[("force", force)]);

        self.execute(request, Some(store)).await?;
        Ok(())
    }

    pub async fn list_documents(&self, store: &StoreName) -> Result<Vec<FileInfo>> {
        let path = format!("{}/documents", store);
        self.list_all::<ListDocumentsResponse>(&path, Some(store))
            .await
    }
}

pub(crate) fn error_from_status(
    status: StatusCode,
    body: &str,
    store: Option<&StoreName>,
) -> FileSearchError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error.message)
        .unwrap_or_else(|| body.trim().to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            FileSearchError::Authentication(format!("{}: {}", status, message))
        }
        StatusCode::NOT_FOUND if store.is_some() => {
            let store = store.map(StoreName::to_string).unwrap_or_default();
            FileSearchError::StoreNotFound(store)
        }
        _ => FileSearchError::Api { status, message },
    }
}
