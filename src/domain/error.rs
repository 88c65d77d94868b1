use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl DomainError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

/// Failure of a single chat-completion round-trip.
///
/// The `Display` form of each variant is the human-readable detail that ends
/// up in [`crate::ParsedFields`] `details`; [`ChatError::reply_text`] adds the
/// `Error: ` prefix used for the raw reply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    /// DNS failure, refused connection, or request timeout.
    #[error("Connection Error: {0}")]
    Transport(String),

    #[error("HTTP {status} - {body}")]
    ApiStatus { status: u16, body: String },

    #[error("JSON Error: {0}")]
    MalformedBody(String),

    #[error("Unexpected Error: {0}")]
    Unexpected(String),

    /// The client produced no value at all.
    #[error("No response from Ollama API")]
    NoResponse,
}

impl ChatError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn api_status(status: u16, body: impl Into<String>) -> Self {
        Self::ApiStatus {
            status,
            body: body.into(),
        }
    }

    pub fn malformed_body(msg: impl Into<String>) -> Self {
        Self::MalformedBody(msg.into())
    }

    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::Unexpected(msg.into())
    }

    /// The prefixed text form, e.g. `Error: HTTP 500 - boom`.
    pub fn reply_text(&self) -> String {
        format!("Error: {self}")
    }

    pub fn is_no_response(&self) -> bool {
        matches!(self, Self::NoResponse)
    }
}
