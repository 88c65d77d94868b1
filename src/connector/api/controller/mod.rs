pub mod classify_controller;
pub mod connection_controller;
pub mod examples_controller;

pub use classify_controller::ClassifyController;
pub use connection_controller::ConnectionController;
pub use examples_controller::ExamplesController;
