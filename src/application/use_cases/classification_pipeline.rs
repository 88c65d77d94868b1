use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{error, info, warn};

use crate::application::ChatClient;
use crate::domain::{
    example_messages, ClassificationRequest, ClassificationResult, ClassifierConfig,
    ConnectivityResult, ExampleCatalog, PromptBuilder, ResponseParser, SenderHint, SuccessPolicy,
    DEFAULT_CLASSIFY_TIMEOUT, DEFAULT_PROBE_TIMEOUT,
};

pub const EMPTY_MESSAGE_ERROR: &str = "Please enter a message to classify";

/// Classifies one transmission per call: prompt, one chat round-trip, parse.
///
/// Holds only immutable configuration, so a single instance can serve
/// independent callers concurrently.
pub struct ClassificationPipeline {
    client: Arc<dyn ChatClient>,
    prompt_builder: PromptBuilder,
    parser: ResponseParser,
    classify_timeout: Duration,
    probe_timeout: Duration,
    success_policy: SuccessPolicy,
}

impl ClassificationPipeline {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self {
            client,
            prompt_builder: PromptBuilder::new(),
            parser: ResponseParser::new(),
            classify_timeout: DEFAULT_CLASSIFY_TIMEOUT,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            success_policy: SuccessPolicy::default(),
        }
    }

    pub fn from_config(client: Arc<dyn ChatClient>, config: &ClassifierConfig) -> Self {
        Self::new(client)
            .with_timeouts(config.classify_timeout, config.probe_timeout)
            .with_success_policy(config.success_policy)
    }

    pub fn with_timeouts(mut self, classify: Duration, probe: Duration) -> Self {
        self.classify_timeout = classify;
        self.probe_timeout = probe;
        self
    }

    pub fn with_success_policy(mut self, policy: SuccessPolicy) -> Self {
        self.success_policy = policy;
        self
    }

    pub fn success_policy(&self) -> SuccessPolicy {
        self.success_policy
    }

    pub async fn classify(&self, message: &str, sender_hint: SenderHint) -> ClassificationResult {
        self.execute(&ClassificationRequest::new(message, sender_hint))
            .await
    }

    pub async fn execute(&self, request: &ClassificationRequest) -> ClassificationResult {
        let preview: String = request.message().chars().take(100).collect();
        info!(
            "Classifying message '{}' (sender hint: {})",
            preview,
            request.sender_hint()
        );

        if request.is_blank() {
            warn!("Empty message provided");
            return ClassificationResult::failure(EMPTY_MESSAGE_ERROR);
        }

        let prompt = self.prompt_builder.build_request(request);
        info!(
            "Sending {} character prompt to {}",
            prompt.len(),
            self.client.model_name()
        );

        let start_time = Instant::now();
        let reply = self.client.send(&prompt, self.classify_timeout).await;
        let elapsed = start_time.elapsed().as_secs_f64();

        match reply {
            Ok(raw) => {
                let fields = self.parser.extract(&raw);
                info!(
                    "Classified as {} from {} in {:.2}s",
                    fields.message_type(),
                    fields.sender(),
                    elapsed
                );
                ClassificationResult::success(fields, raw)
            }
            Err(e) if e.is_no_response() => {
                error!("{e}");
                ClassificationResult::failure(e.to_string())
            }
            Err(e) => {
                let raw = e.reply_text();
                error!("Chat request failed after {:.2}s: {raw}", elapsed);
                let fields = self.parser.failure(&raw);
                match self.success_policy {
                    SuccessPolicy::Structural => ClassificationResult::success(fields, raw),
                    SuccessPolicy::ClientOutcome => {
                        ClassificationResult::failure_with_data(raw.clone(), fields, raw)
                    }
                }
            }
        }
    }

    pub async fn test_connection(&self) -> ConnectivityResult {
        info!("Testing connection to {}", self.client.model_name());
        let result = self.client.probe(self.probe_timeout).await;
        if result.is_success() {
            info!("Connection test successful");
        } else {
            error!("Connection test failed: {}", result.message());
        }
        result
    }

    pub fn list_example_messages(&self) -> ExampleCatalog {
        example_messages()
    }
}
