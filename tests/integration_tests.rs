//! Integration tests for the ATC classifier.
//!
//! These drive the public API against a local mock chat endpoint.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use atc_classifier::connector::api::{Container, ContainerConfig, Router};
use atc_classifier::{
    ClassificationPipeline, ClassifierConfig, Commands, OllamaChatClient, OutputFormat,
    SenderHint, SuccessPolicy,
};

const EMERGENCY_REPLY: &str = "SENDER: PILOT\nTYPE: EMERGENCY\nAIRCRAFT: N123AB\nDETAILS: engine fire\nRESPONSE: Declare emergency, cleared direct, N123AB";

async fn mount_reply(server: &MockServer, status: u16, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

fn config_for(server: &MockServer) -> ClassifierConfig {
    ClassifierConfig::new(format!("{}/api/chat", server.uri()), "gemma3:4b")
}

fn pipeline_for(config: &ClassifierConfig) -> ClassificationPipeline {
    let client = Arc::new(OllamaChatClient::from_config(config));
    ClassificationPipeline::from_config(client, config)
}

#[tokio::test]
async fn test_classify_emergency_end_to_end() {
    let server = MockServer::start().await;
    mount_reply(
        &server,
        200,
        json!({"message": {"role": "assistant", "content": EMERGENCY_REPLY}, "done": true}),
    )
    .await;

    let pipeline = pipeline_for(&config_for(&server));
    let result = pipeline
        .classify("Mayday, Mayday, engine fire, Airbus A320", SenderHint::Pilot)
        .await;

    assert!(result.is_success());
    let data = result.data().expect("fields on success");
    assert_eq!(data.sender(), "PILOT");
    assert_eq!(data.message_type(), "EMERGENCY");
    assert_eq!(data.aircraft(), "N123AB");
    assert_eq!(data.details(), "engine fire");
    assert_eq!(data.response(), "Declare emergency, cleared direct, N123AB");
    assert_eq!(result.raw_reply(), Some(EMERGENCY_REPLY));
}

#[tokio::test]
async fn test_prompt_reaches_endpoint() {
    let server = MockServer::start().await;
    mount_reply(&server, 200, json!({"message": {"content": EMERGENCY_REPLY}})).await;

    let pipeline = pipeline_for(&config_for(&server));
    pipeline
        .classify("United 456, cleared to land runway 09L.", SenderHint::Atc)
        .await;

    let requests: Vec<Request> = server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["model"], "gemma3:4b");
    assert_eq!(body["stream"], false);
    assert_eq!(body["messages"][0]["role"], "user");
    let content = body["messages"][0]["content"].as_str().unwrap();
    assert!(content.contains("Message: \"United 456, cleared to land runway 09L.\""));
    assert!(content.contains("Sender Type: ATC"));
}

#[tokio::test]
async fn test_blank_message_makes_no_request() {
    let server = MockServer::start().await;
    mount_reply(&server, 200, json!({"message": {"content": EMERGENCY_REPLY}})).await;

    let pipeline = pipeline_for(&config_for(&server));
    let result = pipeline.classify("   ", SenderHint::Auto).await;

    assert!(!result.is_success());
    assert_eq!(result.error(), Some("Please enter a message to classify"));
    let requests = server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_http_500_lands_in_details() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let pipeline = pipeline_for(&config_for(&server));
    let result = pipeline.classify("Mayday", SenderHint::Pilot).await;

    let raw = result.raw_reply().unwrap();
    assert!(raw.starts_with("Error: HTTP 500"));
    assert_eq!(result.data().unwrap().details(), raw);
    assert!(result.is_success(), "structural policy reports success");

    let strict = pipeline_for(&config_for(&server).with_success_policy(SuccessPolicy::ClientOutcome));
    let result = strict.classify("Mayday", SenderHint::Pilot).await;
    assert!(!result.is_success());
    assert_eq!(result.error(), Some("Error: HTTP 500 - internal error"));
}

#[tokio::test]
async fn test_timeout_is_connection_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": {"content": EMERGENCY_REPLY}}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = config_for(&server)
        .with_timeouts(Duration::from_millis(100), Duration::from_millis(100));
    let pipeline = pipeline_for(&config);

    let result = pipeline.classify("Mayday", SenderHint::Pilot).await;
    let details = result.data().unwrap().details();
    assert!(details.starts_with("Error: Connection Error: "), "got {details}");

    let probe = pipeline.test_connection().await;
    assert!(!probe.is_success());
    assert!(probe.message().starts_with("Connection failed: "));
}

#[tokio::test]
async fn test_connection_probe() {
    let server = MockServer::start().await;
    mount_reply(&server, 200, json!({"message": {"content": "Hi there"}})).await;

    let result = pipeline_for(&config_for(&server)).test_connection().await;
    assert!(result.is_success());
    assert_eq!(result.message(), "Connection successful");
}

#[tokio::test]
async fn test_router_classifies_example_as_json() {
    let container = Container::new(ContainerConfig {
        classifier: ClassifierConfig::default(),
        mock_reply: Some(EMERGENCY_REPLY.to_string()),
    });
    let router = Router::new(&container);

    let output = router
        .route(Commands::Classify {
            message: None,
            sender: None,
            example: Some("Emergency (Pilot)".to_string()),
            format: OutputFormat::Json,
        })
        .await
        .unwrap();

    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["type"], "EMERGENCY");
    assert_eq!(json["raw_response"], EMERGENCY_REPLY);
}

#[tokio::test]
async fn test_router_rejects_unknown_example() {
    let container = Container::new(ContainerConfig {
        classifier: ClassifierConfig::default(),
        mock_reply: Some(EMERGENCY_REPLY.to_string()),
    });
    let router = Router::new(&container);

    let result = router
        .route(Commands::Classify {
            message: None,
            sender: None,
            example: Some("Holding Pattern (ATC)".to_string()),
            format: OutputFormat::Text,
        })
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_router_text_output_and_examples() {
    let container = Container::new(ContainerConfig {
        classifier: ClassifierConfig::default(),
        mock_reply: Some(EMERGENCY_REPLY.to_string()),
    });
    let router = Router::new(&container);

    let text = router
        .route(Commands::Classify {
            message: Some("Mayday, Mayday, engine fire".to_string()),
            sender: Some(SenderHint::Pilot),
            example: None,
            format: OutputFormat::Text,
        })
        .await
        .unwrap();
    assert!(text.contains("ATC Response:"));
    assert!(text.contains("Indicators: Emergency!"));

    let blank = router
        .route(Commands::Classify {
            message: None,
            sender: None,
            example: None,
            format: OutputFormat::Text,
        })
        .await
        .unwrap();
    assert_eq!(blank, "Classification failed: Please enter a message to classify");

    let examples = router
        .route(Commands::Examples {
            format: OutputFormat::Text,
        })
        .await
        .unwrap();
    assert!(examples.starts_with("8 example messages:"));
    assert!(examples.contains("Frequency Change (ATC) [ATC]"));

    let probe = router
        .route(Commands::TestConnection {
            format: OutputFormat::Text,
        })
        .await
        .unwrap();
    assert_eq!(probe, "Connection successful (mock chat client)");
}

#[tokio::test]
async fn test_router_lists_examples_by_label() {
    let container = Container::new(ContainerConfig {
        classifier: ClassifierConfig::default(),
        mock_reply: Some(EMERGENCY_REPLY.to_string()),
    });
    let router = Router::new(&container);

    let output = router
        .route(Commands::Examples {
            format: OutputFormat::Json,
        })
        .await
        .unwrap();

    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    let catalog = json.as_object().unwrap();
    assert_eq!(catalog.len(), 8);
    assert_eq!(
        catalog["Landing Clearance (ATC)"],
        json!({"message": "United 456, cleared to land runway 09L.", "sender_hint": "ATC"})
    );
}
