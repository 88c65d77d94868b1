use std::time::Duration;

use super::SuccessPolicy;

pub const DEFAULT_ENDPOINT_URL: &str = "http://127.0.0.1:11434/api/chat";
pub const DEFAULT_MODEL: &str = "gemma3:4b";
pub const DEFAULT_CLASSIFY_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the chat endpoint and the pipeline built on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierConfig {
    /// Full URL of the chat endpoint, e.g. Ollama's `/api/chat`.
    pub endpoint_url: String,
    pub model: String,
    pub classify_timeout: Duration,
    pub probe_timeout: Duration,
    pub success_policy: SuccessPolicy,
}

impl ClassifierConfig {
    pub fn new(endpoint_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            model: model.into(),
            ..Self::default()
        }
    }

    pub fn with_success_policy(mut self, policy: SuccessPolicy) -> Self {
        self.success_policy = policy;
        self
    }

    pub fn with_timeouts(mut self, classify: Duration, probe: Duration) -> Self {
        self.classify_timeout = classify;
        self.probe_timeout = probe;
        self
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            classify_timeout: DEFAULT_CLASSIFY_TIMEOUT,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            success_policy: SuccessPolicy::default(),
        }
    }
}
