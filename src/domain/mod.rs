//! # Domain Layer
//!
//! Transmission models, the prompt template and the reply parser.
//! Nothing here performs I/O.

mod error;
pub mod models;
pub mod services;

pub use error::*;
pub use models::*;
pub use services::*;
