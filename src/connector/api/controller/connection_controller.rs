use anyhow::Result;

use crate::cli::OutputFormat;

use super::super::Container;

pub struct ConnectionController<'a> {
    container: &'a Container,
}

impl<'a> ConnectionController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn test(&self, format: OutputFormat) -> Result<String> {
        let result = self.container.pipeline().test_connection().await;

        Ok(match format {
            OutputFormat::Json => serde_json::to_string_pretty(&result)?,
            OutputFormat::Text => {
                let target = if self.container.is_mock() {
                    "mock chat client".to_string()
                } else {
                    format!("{} at {}", self.container.model(), self.container.endpoint_url())
                };
                if result.is_success() {
                    format!("{} ({target})", result.message())
                } else {
                    format!("Connection test failed ({target}): {}", result.message())
                }
            }
        })
    }
}
