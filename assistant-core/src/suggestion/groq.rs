use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    error::{AssistantError, Result},
    http::{send_for_text, truncate_body},
};

use super::SuggestionProvider;

const SERVICE: &str = "Groq";

/// Chat-completions client for Groq's OpenAI-compatible endpoint.
#[derive(Debug, Clone)]
pub struct GroqSuggester {
    api_key: String,
    model: String,
    base_url: String,
    http: Client,
}

impl GroqSuggester {
    pub fn new(api_key: String, model: String, base_url: String, http: Client) -> Self {
        Self { api_key, model, base_url, http }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

#[async_trait]
impl SuggestionProvider for GroqSuggester {
    async fn suggest(&self, prompt: &str) -> Result<String> {
        debug!(model = %self.model, prompt_len = prompt.len(), "requesting suggestion");

        let body = ChatRequest {
            model: &self.model,
            messages: [ChatMessage { role: "user", content: prompt }],
        };
        let request = self
            .http
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&body);

        let (status, body) = send_for_text(SERVICE, request).await?;
        parse_reply(status, &body)
    }
}

fn parse_reply(status: StatusCode, body: &str) -> Result<String> {
    if !status.is_success() {
        let reason = serde_json::from_str::<ApiErrorBody>(body)
            .map(|b| b.error.message)
            .unwrap_or_else(|_| truncate_body(body));
        warn!(%status, %reason, "suggestion request failed");
        return Err(AssistantError::upstream(
            SERVICE,
            format!("request failed with status {status}: {reason}"),
        ));
    }

    let parsed: ChatResponse = serde_json::from_str(body).map_err(|e| {
        AssistantError::upstream(SERVICE, format!("failed to parse completion JSON: {e}"))
    })?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|content| content.trim().to_string())
        .ok_or_else(|| AssistantError::upstream(SERVICE, "completion contained no message"))
}
