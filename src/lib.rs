pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{ChatClient, ClassificationPipeline, EMPTY_MESSAGE_ERROR};

pub use cli::{Commands, OutputFormat, PolicyArg};

pub use connector::{MockChatClient, OllamaChatClient};

pub use domain::{
    example_messages, find_example, ChatError, ClassificationRequest, ClassificationResult,
    ClassifierConfig, ConnectivityResult, DomainError, ExampleCatalog, ExampleMessage, Field,
    MessageIndicator, ParsedFields, Prompt, PromptBuilder, ResponseParser, ResponseRole,
    SenderHint, SuccessPolicy,
};
