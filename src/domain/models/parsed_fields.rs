use serde::{Deserialize, Serialize};

use super::{MessageIndicator, ResponseRole};

/// One of the five tagged fields the model is asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Sender,
    Type,
    Aircraft,
    Details,
    Response,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Sender,
        Field::Type,
        Field::Aircraft,
        Field::Details,
        Field::Response,
    ];

    /// Tag label as it appears in the reply, without the colon.
    pub fn tag(&self) -> &'static str {
        match self {
            Field::Sender => "SENDER",
            Field::Type => "TYPE",
            Field::Aircraft => "AIRCRAFT",
            Field::Details => "DETAILS",
            Field::Response => "RESPONSE",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Field::Sender => "sender",
            Field::Type => "type",
            Field::Aircraft => "aircraft",
            Field::Details => "details",
            Field::Response => "response",
        }
    }

    pub fn default_value(&self) -> &'static str {
        match self {
            Field::Sender => "Unknown",
            Field::Type => "Unknown",
            Field::Aircraft => "Not specified",
            Field::Details => "No details provided",
            Field::Response => "No response generated",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Structured view of a model reply. Every field always holds a value,
/// falling back to its default when the reply did not supply one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedFields {
    sender: String,
    #[serde(rename = "type")]
    message_type: String,
    aircraft: String,
    details: String,
    response: String,
}

impl ParsedFields {
    pub fn new(
        sender: impl Into<String>,
        message_type: impl Into<String>,
        aircraft: impl Into<String>,
        details: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        Self {
            sender: sender.into(),
            message_type: message_type.into(),
            aircraft: aircraft.into(),
            details: details.into(),
            response: response.into(),
        }
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn message_type(&self) -> &str {
        &self.message_type
    }

    pub fn aircraft(&self) -> &str {
        &self.aircraft
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Sender => &self.sender,
            Field::Type => &self.message_type,
            Field::Aircraft => &self.aircraft,
            Field::Details => &self.details,
            Field::Response => &self.response,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Sender => &mut self.sender,
            Field::Type => &mut self.message_type,
            Field::Aircraft => &mut self.aircraft,
            Field::Details => &mut self.details,
            Field::Response => &mut self.response,
        };
        *slot = value.into();
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }

    pub fn is_default(&self, field: Field) -> bool {
        self.get(field) == field.default_value()
    }

    /// Indicators whose keyword appears in the `type` field.
    pub fn indicators(&self) -> Vec<MessageIndicator> {
        MessageIndicator::matching(&self.message_type)
    }

    pub fn response_role(&self) -> ResponseRole {
        ResponseRole::for_sender(&self.sender)
    }
}

impl Default for ParsedFields {
    fn default() -> Self {
        Self::new(
            Field::Sender.default_value(),
            Field::Type.default_value(),
            Field::Aircraft.default_value(),
            Field::Details.default_value(),
            Field::Response.default_value(),
        )
    }
}
