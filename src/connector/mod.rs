//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Chat completion (Ollama over HTTP, plus a scripted mock)
//! - Command-line presentation (container, router, controllers)

pub mod adapter;
pub mod api;

pub use adapter::*;
