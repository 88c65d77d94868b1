use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info};

use crate::application::ChatClient;
use crate::domain::{ChatError, ClassifierConfig, ConnectivityResult, Prompt};

/// User message sent by the connectivity probe.
const PROBE_MESSAGE: &str = "Hello";
/// Characters of reply content shown in logs.
const PREVIEW_CHARS: usize = 200;

/// Ollama `/api/chat` request payload.
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// HTTP client for an Ollama-style chat endpoint
/// (`POST {"model", "messages", "stream": false}` answered by
/// `{"message": {"content": ...}}`).
///
/// Every call is one request with its own timeout. Failures come back as
/// [`ChatError`] variants rather than being retried:
///
/// | Outcome                               | Result                          |
/// |---------------------------------------|---------------------------------|
/// | 200 with `message.content`            | `Ok(content)`                   |
/// | 200 without `message.content`        | `Ok("")`                        |
/// | any other status                      | `ChatError::ApiStatus`          |
/// | refused / DNS / timeout               | `ChatError::Transport`          |
/// | body is not JSON                      | `ChatError::MalformedBody`      |
/// | anything else (bad URL, non-object)   | `ChatError::Unexpected`         |
pub struct OllamaChatClient {
    client: reqwest::Client,
    model: String,
    url: String,
}

impl OllamaChatClient {
    pub fn new(endpoint_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            model: model.into(),
            url: endpoint_url.into(),
        }
    }

    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self::new(config.endpoint_url.clone(), config.model.clone())
    }

    pub fn endpoint_url(&self) -> &str {
        &self.url
    }

    async fn post(&self, content: &str, timeout: Duration) -> Result<reqwest::Response, reqwest::Error> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content,
            }],
            stream: false,
        };

        self.client
            .post(&self.url)
            .timeout(timeout)
            .json(&request)
            .send()
            .await
    }

    fn request_error(e: reqwest::Error) -> ChatError {
        if e.is_builder() {
            ChatError::unexpected(error_chain(e))
        } else {
            ChatError::transport(error_chain(e))
        }
    }

    fn extract_content(body: &str) -> Result<String, ChatError> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| ChatError::malformed_body(e.to_string()))?;

        if !value.is_object() {
            return Err(ChatError::unexpected("response body is not a JSON object"));
        }

        let keys: Vec<&str> = value
            .as_object()
            .map(|o| o.keys().map(String::as_str).collect())
            .unwrap_or_default();
        debug!("Response JSON keys: {:?}", keys);

        Ok(value
            .pointer("/message/content")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string())
    }
}

/// Render an error together with its source chain; reqwest's own `Display`
/// omits the underlying cause (refused, timed out, ...).
fn error_chain(e: reqwest::Error) -> String {
    format!("{:#}", anyhow::Error::new(e))
}

#[async_trait]
impl ChatClient for OllamaChatClient {
    async fn send(&self, prompt: &Prompt, timeout: Duration) -> Result<String, ChatError> {
        info!("Making API call to {} with model {}", self.url, self.model);
        info!("Prompt length: {} characters", prompt.len());

        let response = self.post(prompt.as_str(), timeout).await.map_err(|e| {
            let err = Self::request_error(e);
            error!("{}", err.reply_text());
            err
        })?;

        let status = response.status();
        info!("Response status code: {}", status);

        let body = response.text().await.map_err(|e| {
            let err = ChatError::transport(error_chain(e));
            error!("{}", err.reply_text());
            err
        })?;

        if status != StatusCode::OK {
            let err = ChatError::api_status(status.as_u16(), body);
            error!("{}", err.reply_text());
            return Err(err);
        }

        let content = Self::extract_content(&body).map_err(|err| {
            error!("{}", err.reply_text());
            err
        })?;

        let preview: String = content.chars().take(PREVIEW_CHARS).collect();
        info!("Content length: {} characters", content.len());
        debug!("Content preview: {}", preview);

        Ok(content)
    }

    async fn probe(&self, timeout: Duration) -> ConnectivityResult {
        info!("Testing connection to {} with model {}", self.url, self.model);

        let response = match self.post(PROBE_MESSAGE, timeout).await {
            Ok(r) => r,
            Err(e) => return ConnectivityResult::failed(format!("Connection failed: {}", error_chain(e))),
        };

        let status = response.status();
        info!("Test response status: {}", status);

        let body = match response.text().await {
            Ok(b) => b,
            Err(e) => return ConnectivityResult::failed(format!("Connection failed: {}", error_chain(e))),
        };

        if status != StatusCode::OK {
            return ConnectivityResult::failed(format!("HTTP {}: {}", status.as_u16(), body));
        }

        match serde_json::from_str::<Value>(&body) {
            Ok(_) => ConnectivityResult::ok(),
            Err(e) => ConnectivityResult::failed(format!("Connection failed: {e}")),
        }
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
