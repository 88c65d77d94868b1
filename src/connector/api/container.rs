use std::sync::Arc;

use tracing::debug;

use crate::{ChatClient, ClassificationPipeline, ClassifierConfig, MockChatClient, OllamaChatClient};

pub struct ContainerConfig {
    pub classifier: ClassifierConfig,
    /// Answer every classification with this text instead of calling the
    /// endpoint. Useful for offline demos.
    pub mock_reply: Option<String>,
}

pub struct Container {
    pipeline: Arc<ClassificationPipeline>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let client: Arc<dyn ChatClient> = match config.mock_reply.as_deref() {
            Some(reply) => {
                debug!("Using mock chat client");
                Arc::new(MockChatClient::replying(reply))
            }
            None => {
                debug!(
                    "Using chat endpoint {} with model {}",
                    config.classifier.endpoint_url, config.classifier.model
                );
                Arc::new(OllamaChatClient::from_config(&config.classifier))
            }
        };

        let pipeline = Arc::new(ClassificationPipeline::from_config(client, &config.classifier));

        Self { pipeline, config }
    }

    pub fn pipeline(&self) -> Arc<ClassificationPipeline> {
        Arc::clone(&self.pipeline)
    }

    pub fn endpoint_url(&self) -> &str {
        &self.config.classifier.endpoint_url
    }

    pub fn model(&self) -> &str {
        &self.config.classifier.model
    }

    pub fn is_mock(&self) -> bool {
        self.config.mock_reply.is_some()
    }
}
