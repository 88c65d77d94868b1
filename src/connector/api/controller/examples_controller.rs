use anyhow::Result;

use crate::cli::OutputFormat;
use crate::ExampleCatalog;

use super::super::Container;

pub struct ExamplesController<'a> {
    container: &'a Container,
}

impl<'a> ExamplesController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub fn list(&self, format: OutputFormat) -> Result<String> {
        let examples = self.container.pipeline().list_example_messages();

        Ok(match format {
            OutputFormat::Json => serde_json::to_string_pretty(&examples)?,
            OutputFormat::Text => self.format_examples(examples),
        })
    }

    fn format_examples(&self, examples: ExampleCatalog) -> String {
        let mut output = format!("{} example messages:\n\n", examples.len());
        for (i, example) in examples.iter().enumerate() {
            output.push_str(&format!(
                "{}. {} [{}]\n   {}\n",
                i + 1,
                example.label(),
                example.sender(),
                example.message()
            ));
        }
        output.trim_end().to_string()
    }
}
