use serde::{Deserialize, Serialize};

use super::{ParsedFields, SenderHint};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRequest {
    message: String,
    sender_hint: SenderHint,
}

impl ClassificationRequest {
    pub fn new(message: impl Into<String>, sender_hint: SenderHint) -> Self {
        Self {
            message: message.into(),
            sender_hint,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn sender_hint(&self) -> SenderHint {
        self.sender_hint
    }

    pub fn is_blank(&self) -> bool {
        self.message.trim().is_empty()
    }
}

/// Instruction text sent to the chat model. Built once per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// How `success` is reported when the chat round-trip itself failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuccessPolicy {
    /// `success` is true whenever the reply could be turned into fields,
    /// including the defaulted fields produced for a client failure.
    #[default]
    Structural,
    /// `success` is false whenever the chat client reported a failure.
    ClientOutcome,
}

impl SuccessPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuccessPolicy::Structural => "structural",
            SuccessPolicy::ClientOutcome => "client-outcome",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    success: bool,
    error: Option<String>,
    data: Option<ParsedFields>,
    #[serde(rename = "raw_response", skip_serializing_if = "Option::is_none")]
    raw_reply: Option<String>,
}

impl ClassificationResult {
    pub fn success(data: ParsedFields, raw_reply: impl Into<String>) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
            raw_reply: Some(raw_reply.into()),
        }
    }

    /// Failure that short-circuited before any parsing; carries no fields.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            data: None,
            raw_reply: None,
        }
    }

    /// Failure that still carries the defaulted fields and the error reply.
    pub fn failure_with_data(
        error: impl Into<String>,
        data: ParsedFields,
        raw_reply: impl Into<String>,
    ) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            data: Some(data),
            raw_reply: Some(raw_reply.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn data(&self) -> Option<&ParsedFields> {
        self.data.as_ref()
    }

    pub fn raw_reply(&self) -> Option<&str> {
        self.raw_reply.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectivityResult {
    success: bool,
    message: String,
}

impl ConnectivityResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: "Connection successful".to_string(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
