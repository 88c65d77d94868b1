use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::application::ChatClient;
use crate::domain::{ChatError, ConnectivityResult, Prompt};

/// A [`ChatClient`] that answers every request with a scripted reply.
///
/// Records how it was called so tests can assert that the network was
/// (or was not) touched.
pub struct MockChatClient {
    reply: Result<String, ChatError>,
    probe: ConnectivityResult,
    sends: AtomicUsize,
    probes: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
    last_timeout: Mutex<Option<Duration>>,
}

impl MockChatClient {
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_reply(Ok(text.into()))
    }

    pub fn failing(error: ChatError) -> Self {
        Self::with_reply(Err(error))
    }

    fn with_reply(reply: Result<String, ChatError>) -> Self {
        Self {
            reply,
            probe: ConnectivityResult::ok(),
            sends: AtomicUsize::new(0),
            probes: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
            last_timeout: Mutex::new(None),
        }
    }

    pub fn with_probe(mut self, probe: ConnectivityResult) -> Self {
        self.probe = probe;
        self
    }

    pub fn send_count(&self) -> usize {
        self.sends.load(Ordering::SeqCst)
    }

    pub fn probe_count(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().ok().and_then(|p| p.clone())
    }

    /// Timeout passed to the most recent `send` or `probe`.
    pub fn last_timeout(&self) -> Option<Duration> {
        self.last_timeout.lock().ok().and_then(|t| *t)
    }

    fn record_timeout(&self, timeout: Duration) {
        if let Ok(mut slot) = self.last_timeout.lock() {
            *slot = Some(timeout);
        }
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn send(&self, prompt: &Prompt, timeout: Duration) -> Result<String, ChatError> {
        self.sends.fetch_add(1, Ordering::SeqCst);
        self.record_timeout(timeout);
        if let Ok(mut slot) = self.last_prompt.lock() {
            *slot = Some(prompt.to_string());
        }
        debug!("MockChatClient answering {} character prompt", prompt.len());
        self.reply.clone()
    }

    async fn probe(&self, timeout: Duration) -> ConnectivityResult {
        self.probes.fetch_add(1, Ordering::SeqCst);
        self.record_timeout(timeout);
        self.probe.clone()
    }

    fn model_name(&self) -> &str {
        "mock-chat"
    }
}
