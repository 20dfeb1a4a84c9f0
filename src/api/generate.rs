// file: src/api/generate.rs
// description: generateContent calls grounded on a File Search store

use crate::api::client::GeminiClient;
use crate::api::schema::{GenerateContentRequest, GenerateContentResponse, Tool};
use crate::error::Result;
use crate::models::{Content, StoreName};
use tracing::debug;

impl GeminiClient {
    pub async fn generate_content(
        &self,
        model: &str,
        contents: &[Content],
        store: &StoreName,
    ) -> Result<GenerateContentResponse> {
        let model = model.strip_prefix("models/").unwrap_or(model);
        let url = self.url(&format!("models/{}:generateContent", model));

        debug!(
            "Sending {} turn(s) to {} with store {}",
            contents.len(),
            model,
            store
        );

        let request = self.http.post(url).json(&GenerateContentRequest {
            contents,
            tools: vec![Tool::file_search(store.as_str())],
        });

        self.execute_json(request, None).await
    }
}
