// file: src/search/chat.rs
// description: Multi-turn grounded chat over a caller-owned conversation history

use crate::api::GeminiClient;
use crate::api::schema::GenerateContentResponse;
use crate::error::Result;
use crate::models::{Content, SearchResponse, StoreName};
use crate::search::mapper::ResponseMapper;
use tracing::debug;

pub const QUIT_COMMANDS: [&str; 3] = ["quit", "exit", "q"];

pub fn is_quit_command(input: &str) -> bool {
    let input = input.trim();
    QUIT_COMMANDS
        .iter()
        .any(|cmd| input.eq_ignore_ascii_case(cmd))
}

pub struct ChatSession<'a> {
    client: &'a GeminiClient,
    store: StoreName,
    model: String,
}

impl<'a> ChatSession<'a> {
    pub fn new(client: &'a GeminiClient, store: StoreName, model: impl Into<String>) -> Self {
        Self {
            client,
            store,
            model: model.into(),
        }
    }

    pub fn store(&self) -> &StoreName {
        &self.store
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Runs one turn against the full `history`.
    ///
    /// On success the user and model turns are appended; on failure `history`
    /// is left as it was.
    pub async fn ask(&self, history: &mut Vec<Content>, question: &str) -> Result<SearchResponse> {
        begin_turn(history, question);

        let result = self
            .client
            .generate_content(&self.model, history, &self.store)
            .await;

        match result {
            Ok(response) => Ok(complete_turn(history, &response, &self.model)),
            Err(e) => {
                history.pop();
                Err(e)
            }
        }
    }
}

fn begin_turn(history: &mut Vec<Content>, question: &str) {
    history.push(Content::user(question));
    debug!("Chat history now has {} turn(s)", history.len());
}

fn complete_turn(
    history: &mut Vec<Content>,
    response: &GenerateContentResponse,
    model: &str,
) -> SearchResponse {
    let sr = ResponseMapper::map(response, model);
    history.push(Content::model(sr.answer.clone()));
    sr
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::models::Role;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_quit_commands() {
        for input in ["quit", "EXIT", " q ", "Quit\n"] {
            assert!(is_quit_command(input), "{input:?} should quit");
        }
        for input in ["", "question", "quit now", "qq"] {
            assert!(!is_quit_command(input), "{input:?} should not quit");
        }
    }

    #[test]
    fn test_turns_append_in_order() {
        let mut history = Vec::new();
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{"content": {"role": "model", "parts": [{"text": "Paris."}]}}]
        }))
        .unwrap();

        begin_turn(&mut history, "Capital of France?");
        let sr = complete_turn(&mut history, &response, "gemini-2.5-flash");

        assert_eq!(sr.answer, "Paris.");
        assert_eq!(
            history,
            vec![Content::user("Capital of France?"), Content::model("Paris.")]
        );
        assert_eq!(history[1].role, Some(Role::Model));
    }

    #[test]
    fn test_failed_turn_leaves_history_untouched() {
        let mut config = ApiConfig::default();
        // Nothing listens on the discard port
        config.base_url = "http://127.0.0.1:9".to_string();
        config.timeout_secs = 2;
        let client = GeminiClient::new("k".to_string(), &config).unwrap();
        let session = ChatSession::new(&client, StoreName::new("s"), "gemini-2.5-flash");

        let mut history = vec![Content::user("earlier"), Content::model("reply")];
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let result = runtime.block_on(session.ask(&mut history, "next question"));

        assert!(result.is_err());
        assert_eq!(history.len(), 2);
        assert_eq!(session.store().as_str(), "fileSearchStores/s");
    }
}
