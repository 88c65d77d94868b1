use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{ClassifyController, ConnectionController, ExamplesController};

pub struct Router<'a> {
    classify_controller: ClassifyController<'a>,
    connection_controller: ConnectionController<'a>,
    examples_controller: ExamplesController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            classify_controller: ClassifyController::new(container),
            connection_controller: ConnectionController::new(container),
            examples_controller: ExamplesController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Classify {
                message,
                sender,
                example,
                format,
            } => {
                self.classify_controller
                    .classify(message, sender, example, format)
                    .await
            }
            Commands::TestConnection { format } => self.connection_controller.test(format).await,
            Commands::Examples { format } => self.examples_controller.list(format),
        }
    }
}
