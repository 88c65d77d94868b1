use anyhow::Result;

use crate::cli::OutputFormat;
use crate::{find_example, ClassificationResult, DomainError, ParsedFields, SenderHint};

use super::super::Container;

pub struct ClassifyController<'a> {
    container: &'a Container,
}

impl<'a> ClassifyController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn classify(
        &self,
        message: Option<String>,
        sender: Option<SenderHint>,
        example: Option<String>,
        format: OutputFormat,
    ) -> Result<String> {
        let (message, sender) = match example {
            Some(label) => {
                let example = find_example(&label).ok_or_else(|| {
                    DomainError::not_found(format!("no example labelled '{label}'"))
                })?;
                (
                    message.unwrap_or_else(|| example.message().to_string()),
                    sender.unwrap_or(example.sender()),
                )
            }
            None => (message.unwrap_or_default(), sender.unwrap_or_default()),
        };

        let result = self.container.pipeline().classify(&message, sender).await;

        Ok(match format {
            OutputFormat::Json => serde_json::to_string_pretty(&result)?,
            OutputFormat::Text => format_result(&result),
        })
    }
}

pub(crate) fn format_result(result: &ClassificationResult) -> String {
    let mut out = String::new();

    if let Some(error) = result.error() {
        out.push_str(&format!("Classification failed: {error}\n"));
    }

    if let Some(fields) = result.data() {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format_fields(fields));
    }

    out.trim_end().to_string()
}

fn format_fields(fields: &ParsedFields) -> String {
    let mut out = format!(
        "Sender:   {}\nType:     {}\nAircraft: {}\nDetails:  {}\n\n",
        fields.sender(),
        fields.message_type(),
        fields.aircraft(),
        indent_continuation(fields.details(), 10),
    );

    out.push_str(&format!("{}:\n", fields.response_role().title()));
    let response: String = fields
        .response()
        .lines()
        .map(|l| format!("  {l}\n"))
        .collect();
    out.push_str(&response);

    let indicators = fields.indicators();
    if indicators.is_empty() {
        out.push_str("\nIndicators: none\n");
    } else {
        let labels: Vec<String> = indicators
            .iter()
            .map(|i| {
                if i.is_alert() {
                    format!("{}!", i.label())
                } else {
                    i.label().to_string()
                }
            })
            .collect();
        out.push_str(&format!("\nIndicators: {}\n", labels.join(", ")));
    }

    out
}

/// Indent every line after the first so wrapped details stay aligned.
fn indent_continuation(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.lines().collect::<Vec<_>>().join(&format!("\n{pad}"))
}
