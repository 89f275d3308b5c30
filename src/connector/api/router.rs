use anyhow::{bail, Result};

use crate::Commands;

use super::container::Container;
use super::controller::{ChatController, ModelsController};

/// Dispatches one-shot CLI commands to their controllers.
pub struct Router<'a> {
    chat_controller: ChatController<'a>,
    models_controller: ModelsController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            chat_controller: ChatController::new(container),
            models_controller: ModelsController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Chat {
                query,
                context,
                api_key,
            } => self.chat_controller.chat(query, context, api_key).await,
            Commands::Models => self.models_controller.list(),
            Commands::Serve { .. } => bail!("serve is handled by the HTTP server, not the router"),
        }
    }
}
