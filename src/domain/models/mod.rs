mod classification;
mod config;
mod example_message;
mod indicator;
mod parsed_fields;
mod sender;

pub use classification::*;
pub use config::*;
pub use example_message::*;
pub use indicator::*;
pub use parsed_fields::*;
pub use sender::*;
