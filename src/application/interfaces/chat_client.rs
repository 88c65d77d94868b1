use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{ChatError, ConnectivityResult, Prompt};

/// Sends prompts to a chat-completion model and returns the reply text.
///
/// Implementors own transport, serialization and vendor details. Each call
/// is a single round-trip bounded by `timeout`; nothing is retried.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send `prompt` as a single user message and return the assistant text.
    ///
    /// A successful reply with no content is `Ok("")`.
    async fn send(&self, prompt: &Prompt, timeout: Duration) -> Result<String, ChatError>;

    /// Check that the endpoint answers a trivial request with a JSON body.
    /// Every failure kind is collapsed into the returned message.
    async fn probe(&self, timeout: Duration) -> ConnectivityResult;

    /// Identifier of the model replies come from, for logging.
    fn model_name(&self) -> &str;
}
