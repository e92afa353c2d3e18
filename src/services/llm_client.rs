use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Ways a chat completion request can fail. Callers decide how to surface
/// these; the dispatcher turns them into in-chat apologies.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("the completion endpoint URL is not valid")]
    InvalidEndpoint,
    #[error("the assistant returned an empty response")]
    NoResponseBody,
    #[error("the assistant response could not be read")]
    UnparseableResponse,
    #[error("the assistant service reported a problem: {0}")]
    Provider(String),
    #[error("the request did not reach the assistant service: {0}")]
    Transport(#[from] reqwest::Error),
}

/// OpenAI-compatible chat completion request
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// OpenAI-compatible chat completion response
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[allow(dead_code)]
    id: Option<String>,
    choices: Vec<Choice>,
    #[allow(dead_code)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[allow(dead_code)]
    index: Option<usize>,
    message: ChatMessage,
    #[allow(dead_code)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

/// Error envelope providers return instead of a completion.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
    #[allow(dead_code)]
    code: Option<String>,
}

/// Client for OpenAI-compatible chat completion APIs
pub struct LlmClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl LlmClient {
    /// Create a new client with the given configuration
    pub fn new(base_url: &str, api_key: &str, model: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60)) // plenty for a single chat answer
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    /// Create a new client from the app's configuration
    pub fn from_config() -> Result<Self, String> {
        let (base_url, model, api_key) = super::config_service::get_effective_config()?;

        if api_key.is_empty() {
            return Err("No API key configured. Please add your API key in Settings.".to_string());
        }

        Ok(Self::new(&base_url, &api_key, &model))
    }

    /// Send a single chat completion request. One POST, no retries; every
    /// failure mode maps to a `CompletionError` variant.
    pub async fn chat_completion(
        &self,
        messages: Vec<ChatMessage>,
        temperature: Option<f32>,
        max_tokens: Option<u32>,
    ) -> Result<String, CompletionError> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages,
            temperature,
            max_tokens,
        };

        // Build the full URL - append /chat/completions if base_url doesn't already include it
        let endpoint = if self.base_url.contains("/chat/completions") {
            self.base_url.clone()
        } else {
            format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
        };
        let url = Url::parse(&endpoint).map_err(|_| CompletionError::InvalidEndpoint)?;

        debug!(endpoint = %url, model = %self.model, "sending chat completion request");

        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        parse_completion_body(status, &body)
    }

    /// Helper to create a system message
    pub fn system_message(content: &str) -> ChatMessage {
        ChatMessage {
            role: "system".to_string(),
            content: content.to_string(),
        }
    }

    /// Helper to create a user message
    pub fn user_message(content: &str) -> ChatMessage {
        ChatMessage {
            role: "user".to_string(),
            content: content.to_string(),
        }
    }
}

/// Turn a raw completion response into the first choice's message content.
/// Providers report failures as an `error` object, occasionally with a 200
/// status, so the error envelope is checked before the status code.
fn parse_completion_body(status: StatusCode, body: &str) -> Result<String, CompletionError> {
    if body.trim().is_empty() {
        return Err(CompletionError::NoResponseBody);
    }

    if let Ok(failure) = serde_json::from_str::<ErrorResponse>(body) {
        return Err(CompletionError::Provider(failure.error.message));
    }

    if !status.is_success() {
        return Err(CompletionError::Provider(format!(
            "API error ({}): {}",
            status,
            body.trim()
        )));
    }

    let completion: ChatCompletionResponse =
        serde_json::from_str(body).map_err(|_| CompletionError::UnparseableResponse)?;

    completion
        .choices
        .first()
        .map(|c| c.message.content.clone())
        .ok_or(CompletionError::NoResponseBody)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_first_choice_content() {
        let body = r#"{"id":"cmpl-1","choices":[{"index":0,"message":{"role":"assistant","content":"Drink water."},"finish_reason":"stop"}]}"#;
        let result = parse_completion_body(StatusCode::OK, body).unwrap();
        assert_eq!(result, "Drink water.");
    }

    #[test]
    fn empty_body_is_no_response() {
        let err = parse_completion_body(StatusCode::OK, "  ").unwrap_err();
        assert!(matches!(err, CompletionError::NoResponseBody));
    }

    #[test]
    fn empty_choices_is_no_response() {
        let err = parse_completion_body(StatusCode::OK, r#"{"choices":[]}"#).unwrap_err();
        assert!(matches!(err, CompletionError::NoResponseBody));
    }

    #[test]
    fn garbage_body_is_unparseable() {
        let err = parse_completion_body(StatusCode::OK, "<html>hi</html>").unwrap_err();
        assert!(matches!(err, CompletionError::UnparseableResponse));
    }

    #[test]
    fn error_envelope_wins_over_status() {
        let body = r#"{"error":{"message":"model overloaded","code":"overloaded"}}"#;
        let err = parse_completion_body(StatusCode::OK, body).unwrap_err();
        match err {
            CompletionError::Provider(message) => assert_eq!(message, "model overloaded"),
            other => panic!("expected provider error, got {:?}", other),
        }
    }

    #[test]
    fn non_success_status_without_envelope_is_provider_error() {
        let err = parse_completion_body(StatusCode::BAD_GATEWAY, "upstream down").unwrap_err();
        match err {
            CompletionError::Provider(message) => {
                assert!(message.contains("502"));
                assert!(message.contains("upstream down"));
            }
            other => panic!("expected provider error, got {:?}", other),
        }
    }
}
